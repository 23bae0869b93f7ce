#[cfg(feature = "backend")]
pub mod validation;

pub mod data_structures {
    use serde;
    #[cfg(feature = "backend")]
    use validator::Validate;

    /// The two kinds of site content that accept comments and reactions.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ContentKind {
        Blog,
        Photo,
    }

    impl ContentKind {
        pub fn parse(raw: &str) -> Option<ContentKind> {
            match raw {
                "blog" => Some(ContentKind::Blog),
                "photo" => Some(ContentKind::Photo),
                _ => None,
            }
        }

        pub fn as_str(&self) -> &'static str {
            match self {
                ContentKind::Blog => "blog",
                ContentKind::Photo => "photo",
            }
        }
    }

    impl std::fmt::Display for ContentKind {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// Every reaction the clients may toggle, one per reaction button.
    pub const ALLOWED_REACTION_TYPES: [&str; 10] =
        ["👍", "❤️", "😊", "😢", "😮", "😡", "🔥", "⭐", "🎉", "💯"];

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    #[cfg_attr(feature = "backend", derive(Validate))]
    pub struct CommentCreationData {
        pub content_type: String,
        pub content_id: i32,
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, max = 100, message = "author name of disallowed size"))
        )]
        pub author_name: String,
        #[cfg_attr(
            feature = "backend",
            validate(length(max = 255, message = "author email of disallowed size"))
        )]
        pub author_email: Option<String>,
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, max = 1000, message = "comment content of disallowed size"))
        )]
        pub content: String,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct CommentData {
        pub id: i32,
        pub author_name: String,
        pub content: String,
        pub created_date: chrono::NaiveDateTime,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct PendingCommentData {
        pub id: i32,
        pub content_type: String,
        pub content_id: i32,
        pub author_name: String,
        pub author_email: Option<String>,
        pub content: String,
        pub created_date: chrono::NaiveDateTime,
        pub is_approved: bool,
        pub content_title: String,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct CommentCreatedResponse {
        pub message: String,
        pub id: i32,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    pub struct MessageResponse {
        pub message: String,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    #[cfg_attr(feature = "backend", derive(Validate))]
    pub struct ReactionToggleData {
        pub content_type: String,
        pub content_id: i32,
        #[cfg_attr(
            feature = "backend",
            validate(custom(function = "crate::validation::validate_reaction_type"))
        )]
        pub reaction_type: String,
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, max = 255, message = "user identifier of disallowed size"))
        )]
        pub user_identifier: String,
    }

    #[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum ToggleAction {
        Added,
        Removed,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct ReactionToggleResponse {
        pub action: ToggleAction,
        pub reaction_type: String,
    }

    /// One row of the site-wide reaction summary. These keys stay PascalCase
    /// on the wire, the admin panel reads them that way.
    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[serde(rename_all = "PascalCase")]
    pub struct ReactionSummaryData {
        pub content_type: String,
        pub content_id: i32,
        pub reaction_type: String,
        pub count: i64,
        pub content_title: Option<String>,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct ReactionsClearedResponse {
        pub message: String,
        pub deleted_count: u64,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[cfg_attr(feature = "backend", derive(Validate))]
    pub struct BlogPostCreationData {
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, max = 200, message = "post title of disallowed size"))
        )]
        pub title: String,
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, message = "post content must not be empty"))
        )]
        pub content: String,
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, max = 100, message = "post author of disallowed size"))
        )]
        pub author: String,
    }

    #[derive(Clone, serde::Serialize, serde::Deserialize, Debug)]
    #[cfg_attr(feature = "backend", derive(Validate))]
    pub struct BlogPostUpdateData {
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, max = 200, message = "post title of disallowed size"))
        )]
        pub title: Option<String>,
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, message = "post content must not be empty"))
        )]
        pub content: Option<String>,
        #[cfg_attr(
            feature = "backend",
            validate(length(min = 1, max = 100, message = "post author of disallowed size"))
        )]
        pub author: Option<String>,
    }

    #[cfg(feature = "backend")]
    #[derive(Clone, serde::Serialize, Debug)]
    pub struct ValidationErrorResponse {
        pub reason: String,
        pub errors: validator::ValidationErrors,
    }
}
