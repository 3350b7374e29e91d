use serde::Deserialize;

// clients send ids either as numbers or as numeric strings ("1"), anything else is rejected
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawId")]
pub struct Id(pub i64);

impl TryFrom<RawId> for Id {
    type Error = String;

    fn try_from(value: RawId) -> Result<Self, Self::Error> {
        match value {
            RawId::Number(v) => Ok(Id(v)),
            RawId::Text(text) => match text.trim().parse::<i64>() {
                Ok(v) => Ok(Id(v)),
                Err(_) => Err(format!("Wrong value {text}, can not parse to i64")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_numeric_strings_are_ids() {
        let ids: Vec<Id> = serde_json::from_str(r#"[1, "20", " 3 "]"#).unwrap();
        assert_eq!(ids, vec![Id(1), Id(20), Id(3)]);
    }

    #[test]
    fn other_values_are_rejected() {
        assert!(serde_json::from_str::<Id>(r#""one""#).is_err());
        assert!(serde_json::from_str::<Id>("1.5").is_err());
        assert!(serde_json::from_str::<Id>("null").is_err());
    }
}
