use validator::ValidationError;

use crate::data_structures::ALLOWED_REACTION_TYPES;

pub fn validate_reaction_type(reaction_type: &str) -> Result<(), ValidationError> {
    if ALLOWED_REACTION_TYPES.contains(&reaction_type) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_reaction_type")
            .with_message("Invalid reaction type".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::{CommentCreationData, ReactionToggleData};
    use validator::Validate;

    #[test]
    fn accepts_every_allowed_reaction() {
        for reaction in ALLOWED_REACTION_TYPES {
            assert!(validate_reaction_type(reaction).is_ok());
        }
    }

    #[test]
    fn rejects_unlisted_reactions() {
        assert!(validate_reaction_type("🙂").is_err());
        assert!(validate_reaction_type("thumbsup").is_err());
        assert!(validate_reaction_type("").is_err());
    }

    #[test]
    fn toggle_data_validation_checks_reaction_and_identifier() {
        let toggle = ReactionToggleData {
            content_type: "blog".to_owned(),
            content_id: 1,
            reaction_type: "👍".to_owned(),
            user_identifier: "visitor-1".to_owned(),
        };
        assert!(toggle.validate().is_ok());

        let mut bad_reaction = toggle.clone();
        bad_reaction.reaction_type = "🙂".to_owned();
        assert!(bad_reaction.validate().is_err());

        let mut bad_identifier = toggle;
        bad_identifier.user_identifier = String::new();
        assert!(bad_identifier.validate().is_err());
    }

    #[test]
    fn comment_data_validation_limits_content_length() {
        let comment = CommentCreationData {
            content_type: "blog".to_owned(),
            content_id: 1,
            author_name: "Ana".to_owned(),
            author_email: None,
            content: "a fine post".to_owned(),
        };
        assert!(comment.validate().is_ok());

        let mut too_long = comment.clone();
        too_long.content = "x".repeat(1001);
        assert!(too_long.validate().is_err());

        let mut at_limit = comment.clone();
        at_limit.content = "x".repeat(1000);
        assert!(at_limit.validate().is_ok());

        let mut empty = comment;
        empty.content = String::new();
        assert!(empty.validate().is_err());
    }
}
