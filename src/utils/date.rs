pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        t.format(DATE_FMT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[test]
    fn test_should_serialize_and_parse_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9).and_then(|d| d.and_hms_milli_opt(14, 5, 7, 250)).expect("valid date");
        let json = serde_json::to_string(&Stamped { at }).expect("serialize");
        assert_eq!(r#"{"at":"2024-03-09T14:05:07.250"}"#, json);
        let loaded: Stamped = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(at, loaded.at);
    }

    #[test]
    fn test_should_reject_malformed_timestamp() {
        let res: Result<Stamped, _> = serde_json::from_str(r#"{"at":"yesterday"}"#);
        assert!(res.is_err());
    }
}
