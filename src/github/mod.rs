pub mod client;

mod serdes;

use serde::Deserialize;
use serdes::*;

//the event kinds we know how to summarise. The API taxonomy is open ended,
//so these stay plain strings: anything else still decodes and goes through
//the fallback arm of `Event::describe`
pub const PUSH_EVENT: &str = "PushEvent";
pub const PULL_REQUEST_EVENT: &str = "PullRequestEvent";
pub const CREATE_EVENT: &str = "CreateEvent";
pub const WATCH_EVENT: &str = "WatchEvent";
pub const DELETE_EVENT: &str = "DeleteEvent";
pub const FORK_EVENT: &str = "ForkEvent";
pub const ISSUES_EVENT: &str = "IssuesEvent";
pub const ISSUE_COMMENT_EVENT: &str = "IssueCommentEvent";
pub const PUBLIC_EVENT: &str = "PublicEvent";
pub const MEMBER_EVENT: &str = "MemberEvent";
pub const RELEASE_EVENT: &str = "ReleaseEvent";

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub repo: Repo,
    #[serde(default, deserialize_with = "null_to_default")]
    pub payload: Payload,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct Repo {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
}

//one flat bag of optional fields: the API delivers the same `payload`
//object for every event kind, with only the relevant subset populated
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct Payload {
    #[serde(rename = "ref", default, deserialize_with = "null_to_default")]
    pub reference: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub ref_type: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub commits: Vec<Commit>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub action: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub forkee: Forkee,
    #[serde(default, deserialize_with = "null_to_default")]
    pub issue: Issue,
    #[serde(default, deserialize_with = "null_to_default")]
    pub pull_request: PullRequest,
    #[serde(default, deserialize_with = "null_to_default")]
    pub member: Member,
    #[serde(default, deserialize_with = "null_to_default")]
    pub release: Release,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct Commit {
    #[serde(default, deserialize_with = "null_to_default")]
    pub message: String,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct Forkee {
    #[serde(default, deserialize_with = "null_to_default")]
    pub full_name: String,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct Issue {
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct PullRequest {
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct Member {
    #[serde(default, deserialize_with = "null_to_default")]
    pub login: String,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct Release {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
}

impl Event {
    //one human readable line per event. Unrecognised kinds get the generic
    //`<type> to <repo>` line rather than an error
    pub fn describe(&self) -> String {
        match self.event_type.as_str() {
            PUSH_EVENT => format!(
                "Pushed {} commits to {}",
                self.payload.commits.len(),
                self.repo.name
            ),
            CREATE_EVENT => {
                if self.payload.ref_type == "repository" {
                    format!("Created repository at {}", self.repo.name)
                } else {
                    format!(
                        "Created {} '{}' at {}",
                        self.payload.ref_type, self.payload.reference, self.repo.name
                    )
                }
            }
            WATCH_EVENT => {
                if self.payload.action == "started" {
                    format!("Started watching {}", self.repo.name)
                } else {
                    format!("Ended watching {}", self.repo.name)
                }
            }
            DELETE_EVENT => format!(
                "Deleted {} '{}' at {}",
                self.payload.ref_type, self.payload.reference, self.repo.name
            ),
            FORK_EVENT => format!(
                "Forked {} to {}",
                self.repo.name, self.payload.forkee.full_name
            ),
            ISSUES_EVENT => format!(
                "Issue '{}' {} at {}",
                self.payload.issue.title, self.payload.action, self.repo.name
            ),
            ISSUE_COMMENT_EVENT => format!(
                "Commented at issue '{}' at {}",
                self.payload.issue.title, self.repo.name
            ),
            PULL_REQUEST_EVENT => format!(
                "Pull request '{}' {} at {}",
                self.payload.pull_request.title, self.payload.action, self.repo.name
            ),
            PUBLIC_EVENT => format!("Repo {} is now public", self.repo.name),
            MEMBER_EVENT => format!("Added {} to {}", self.payload.member.login, self.repo.name),
            RELEASE_EVENT => format!(
                "Released '{}' at {}",
                self.payload.release.name, self.repo.name
            ),
            other => format!("{} to {}", other, self.repo.name),
        }
    }
}

//an empty pattern means no filtering at all, not an empty-string match
pub fn filter_events(events: Vec<Event>, pattern: &str) -> Vec<Event> {
    if pattern.is_empty() {
        return events;
    }

    let pattern = pattern.to_lowercase();
    events
        .into_iter()
        .filter(|event| event.event_type.to_lowercase().contains(&pattern))
        .collect()
}
