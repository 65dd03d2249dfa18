//! Enumeration types for the TAPD API.
//!
//! Every enum renders to its wire string through `Display`, so any of them
//! can be placed in a [`Multi`](super::Multi) or [`Enum`](super::Enum)
//! filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Every variant, in declaration order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant,)+]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!(concat!("unknown ", stringify!($name), ": {}"), other)),
                }
            }
        }
    };
}

wire_enum! {
    /// Priority label of a story or bug.
    pub enum PriorityLabel {
        /// High
        High => "High",
        /// Middle
        Middle => "Middle",
        /// Low
        Low => "Low",
        /// Nice to have
        NiceToHave => "Nice To Have",
    }
}

wire_enum! {
    /// Status of a task.
    pub enum TaskStatus {
        /// Not started
        Open => "open",
        /// In progress
        Progressing => "progressing",
        /// Finished
        Done => "done",
    }
}

wire_enum! {
    /// Kind of entity a comment is attached to.
    pub enum CommentEntryType {
        /// Bug
        Bug => "bug",
        /// Comment left while moving a bug through its workflow
        BugRemark => "bug_remark",
        /// Story
        Stories => "stories",
        /// Task
        Tasks => "tasks",
        /// Wiki page
        Wiki => "wiki",
        /// Mini item
        MiniItems => "mini_items",
    }
}

wire_enum! {
    /// Operation recorded in a member activity log.
    pub enum OperateType {
        /// Created something
        Add => "add",
        /// Deleted something
        Delete => "delete",
        /// Downloaded a file
        Download => "download",
        /// Uploaded a file
        Upload => "upload",
    }
}

wire_enum! {
    /// Object kind recorded in a member activity log.
    pub enum OperateObject {
        /// Attachment
        Attachment => "attachment",
        /// Board
        Board => "board",
        /// Bug
        Bug => "bug",
        /// Document
        Document => "document",
        /// Iteration
        Iteration => "iteration",
        /// Launch form
        Launch => "launch",
        /// The activity log itself
        MemberActivityLog => "member_activity_log",
        /// Release
        Release => "release",
        /// Story
        Story => "story",
        /// Task
        Task => "task",
        /// Test case
        Tcase => "tcase",
        /// Test plan
        Testplan => "testplan",
        /// Wiki page
        Wiki => "wiki",
    }
}
