#![forbid(unsafe_code)]

pub mod labels {
    pub const ALL_SENTINEL: &str = "all";
    pub const UNCATEGORIZED: &str = "uncategorized";

    pub const DEFAULT_LABELS: &[&str] = &[
        UNCATEGORIZED,
        "gameplay",
        "character",
        "level",
        "skin",
        "operation",
    ];

    pub fn is_all_sentinel(value: &str) -> bool {
        value.eq_ignore_ascii_case(ALL_SENTINEL)
    }

    pub fn is_protected(value: &str) -> bool {
        is_all_sentinel(value) || value.eq_ignore_ascii_case(UNCATEGORIZED)
    }
}

pub mod cleanup {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum CleanupStrategy {
        DeleteIdeas,
        ReassignToUncategorized,
    }

    impl CleanupStrategy {
        pub fn as_str(self) -> &'static str {
            match self {
                CleanupStrategy::DeleteIdeas => "delete",
                CleanupStrategy::ReassignToUncategorized => "reassign",
            }
        }
    }
}

pub mod categories;
