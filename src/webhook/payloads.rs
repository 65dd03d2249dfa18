//! Concrete webhook payload shapes.
//!
//! Every payload is a flat JSON object of string values. The fields shared
//! by all events live in [`EventMeta`], flattened into each struct; the
//! remaining fields are specific to the entity that changed. Missing keys
//! decode as empty strings.

use serde::{Deserialize, Serialize};

use super::{ChangeFields, EventMeta};

macro_rules! event_payload {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty,
            )*
        }
    )+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// Fields common to every event
            #[serde(flatten)]
            pub meta: EventMeta,
            $(
                $(#[$fmeta])*
                #[serde(default)]
                pub $field: $ty,
            )*
        }
    )+};
}

macro_rules! comment_payloads {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        event_payload! {$(
            $(#[$meta])*
            pub struct $name {
                /// Title, e.g. the status the comment was added in
                title: String,
                /// Rich-text content
                description: String,
                /// Author
                author: String,
                /// Id of the commented entity
                entity_id: String,
            }
        )+}
    };
}

event_payload! {
    /// A story was created.
    pub struct StoryCreateEvent {
        /// Title
        name: String,
        /// Rich-text description
        description: String,
        /// Creator
        creator: String,
        /// Owners (`;`-separated)
        owner: String,
        /// CC list
        cc: String,
        /// Developers
        developer: String,
        /// Workflow status
        status: String,
        /// Priority
        priority: String,
        /// Iteration id
        iteration_id: String,
        /// Category id
        category_id: String,
        /// Parent story id
        parent_id: String,
        /// Release id
        release_id: String,
        /// Planned start date
        begin: String,
        /// Due date
        due: String,
        /// Size
        size: String,
        /// Estimated effort
        effort: String,
        /// Labels
        label: String,
        /// Template id
        templated_id: String,
        /// Work item type id
        workitem_type_id: String,
    }

    /// A story was updated.
    pub struct StoryUpdateEvent {
        /// Fields the update touched
        change_fields: ChangeFields,
        /// Title
        name: String,
        /// Rich-text description
        description: String,
        /// Workflow status
        status: String,
        /// Owners
        owner: String,
        /// CC list
        cc: String,
        /// Priority
        priority: String,
        /// Iteration id
        iteration_id: String,
        /// Planned start date
        begin: String,
        /// Due date
        due: String,
    }

    /// A story was deleted.
    pub struct StoryDeleteEvent {
        /// Title
        name: String,
    }

    /// A task was created.
    pub struct TaskCreateEvent {
        /// Title
        name: String,
        /// Rich-text description
        description: String,
        /// Creator
        creator: String,
        /// Owner
        owner: String,
        /// CC list
        cc: String,
        /// Status
        status: String,
        /// Parent story id
        story_id: String,
        /// Iteration id
        iteration_id: String,
        /// Priority
        priority: String,
        /// Planned start date
        begin: String,
        /// Due date
        due: String,
        /// Estimated effort
        effort: String,
        /// Labels
        label: String,
    }

    /// A task was updated.
    pub struct TaskUpdateEvent {
        /// Fields the update touched
        change_fields: ChangeFields,
        /// Title
        name: String,
        /// Status
        status: String,
        /// Owner
        owner: String,
        /// Parent story id
        story_id: String,
        /// Iteration id
        iteration_id: String,
        /// Planned start date
        begin: String,
        /// Due date
        due: String,
        /// Estimated effort
        effort: String,
        /// Completed effort
        effort_completed: String,
        /// Remaining effort
        remain: String,
        /// Progress percentage
        progress: String,
    }

    /// A task was deleted.
    pub struct TaskDeleteEvent {
        /// Title
        name: String,
    }

    /// A bug was created.
    pub struct BugCreateEvent {
        /// Title
        title: String,
        /// Issue id
        issue_id: String,
        /// New-status flag
        is_new_status: String,
        /// Replication flag
        is_replicate: String,
        /// Create-link flag
        create_link: String,
        /// Created by Jenkins
        is_jenkins: String,
        /// Template id
        template_id: String,
        /// Rich-text description
        description: String,
        /// Iteration id
        iteration_id: String,
        /// Custom field 3
        custom_field_three: String,
        /// Severity
        severity: String,
        /// Priority
        priority: String,
        /// Custom field 4
        custom_field_four: String,
        /// Current owner
        current_owner: String,
        /// CC list
        cc: String,
        /// Developers
        de: String,
        /// Testers
        te: String,
        /// Custom field 6
        custom_field_6: String,
        /// Platform
        platform: String,
        /// Bug type
        bugtype: String,
        /// Phase the bug originated in
        originphase: String,
        /// Source
        source: String,
        /// Custom field 1
        custom_field_one: String,
        /// Description format
        description_type: String,
        /// Project id
        project_id: String,
        /// Draft flag
        is_draft: String,
        /// Planned start date
        begin: String,
        /// Due date
        due: String,
        /// Workflow status
        status: String,
        /// Reporter
        reporter: String,
        /// Workflow id
        flows: String,
        /// Resolution
        resolution: String,
        /// Resolution time
        resolved: String,
        /// Close time
        closed: String,
        /// Time work started
        in_progress_time: String,
        /// Verification time
        verify_time: String,
        /// Rejection time
        reject_time: String,
        /// Audit time
        audit_time: String,
        /// Suspension time
        suspend_time: String,
    }

    /// A bug was updated.
    pub struct BugUpdateEvent {
        /// Fields the update touched
        change_fields: ChangeFields,
        /// Title
        title: String,
        /// Workflow status
        status: String,
        /// Severity
        severity: String,
        /// Priority
        priority: String,
        /// Current owner
        current_owner: String,
        /// Developers
        de: String,
        /// Testers
        te: String,
        /// Resolution
        resolution: String,
        /// Iteration id
        iteration_id: String,
    }

    /// A bug was deleted.
    pub struct BugDeleteEvent {
        /// Title
        title: String,
    }

    /// An iteration was created.
    pub struct IterationCreateEvent {
        /// Name
        name: String,
        /// Description
        description: String,
        /// Creator
        creator: String,
        /// Status
        status: String,
        /// Start date
        startdate: String,
        /// End date
        enddate: String,
        /// Parent iteration id
        parent_id: String,
        /// Work item type id
        workitem_type_id: String,
        /// Template id
        templated_id: String,
    }

    /// An iteration was updated.
    pub struct IterationUpdateEvent {
        /// Fields the update touched
        change_fields: ChangeFields,
        /// Name
        name: String,
        /// Status
        status: String,
        /// Start date
        startdate: String,
        /// End date
        enddate: String,
    }

    /// An iteration was deleted.
    pub struct IterationDeleteEvent {
        /// Name
        name: String,
    }
}

comment_payloads! {
    /// A comment was added to a story.
    StoryCommentAddEvent;
    /// A story comment was edited.
    StoryCommentUpdateEvent;
    /// A story comment was deleted.
    StoryCommentDeleteEvent;
    /// A comment was added to a task.
    TaskCommentAddEvent;
    /// A task comment was edited.
    TaskCommentUpdateEvent;
    /// A task comment was deleted.
    TaskCommentDeleteEvent;
    /// A comment was added to a bug.
    BugCommentAddEvent;
    /// A bug comment was edited.
    BugCommentUpdateEvent;
    /// A bug comment was deleted.
    BugCommentDeleteEvent;
}
