use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

/// Runs the declared validation rules on an incoming request body and hands it
/// back untouched when every rule passes.
pub fn validate_request<T: Validate>(request: T) -> Result<T, ValidationErrors> {
    request.validate()?;
    Ok(request)
}

/// Reads an optional JSON string, treating `null` like a missing key so both
/// reach the `length` rule as an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{entities::models::Member, types::errors::member_error::MemberError};

    #[test]
    fn test_validate_request_accepts_named_member() {
        let member = Member {
            id: 0,
            name: "spring".to_string(),
        };

        let validated = validate_request(member.clone()).unwrap();
        assert_eq!(validated, member);
    }

    #[test]
    fn test_null_name_reads_as_empty() {
        let member: Member = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(member.name, "");
        assert!(validate_request(member).is_err());
    }

    #[test]
    fn test_validate_request_rejects_empty_name() {
        let member = Member {
            id: 0,
            name: String::new(),
        };

        let errors = validate_request(member).unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(matches!(
            MemberError::from(errors),
            MemberError::Validation(_)
        ));
    }
}
