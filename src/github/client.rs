use super::Event;
use crate::config::GithubConfig;
use log::debug;
use std::io;
use thiserror::Error;

const USER_AGENT: &str = "ghactivity";
const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Couldn't reach the github API")]
    Connection(#[from] reqwest::Error),
    #[error("Couldn't get response from github (status code {0})")]
    Status(u16),
    #[error("The response body was not well formatted JSON")]
    UnparsableBody(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;

pub struct ActivityClient {
    config: GithubConfig,
    client: reqwest::blocking::Client,
}

impl ActivityClient {
    pub fn new(config: GithubConfig) -> Self {
        ActivityClient {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    //one page of the user's public activity, most recent event first, in
    //the order github delivered it
    pub fn user_events(&self, username: &str, page: u32, per_page: u32) -> Result<Vec<Event>> {
        let endpoint_url = format!("{}/users/{}/events", self.config.base_url, username);

        debug!("fetching user events from API endpoint: {}", &endpoint_url);

        let resp = self
            .client
            .get(&endpoint_url)
            .query(&[
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let events = decode_events(resp)?;
        debug!("{} events fetched", events.len());
        Ok(events)
    }
}

fn decode_events<R: io::Read>(input: R) -> Result<Vec<Event>> {
    let events = serde_json::from_reader(input)?;
    Ok(events)
}

#[cfg(test)]
mod tests {
    extern crate pretty_assertions;

    use super::*;
    use crate::github::{Commit, Payload, Repo};
    use pretty_assertions::assert_eq;

    const USER_EVENTS_JSON: &str = include_str!("testdata/gh.user-events.json");

    #[test]
    fn decode_events_from_an_api_page() {
        let events = decode_events(USER_EVENTS_JSON.as_bytes()).unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            Event {
                event_type: "PushEvent".to_owned(),
                repo: Repo {
                    name: "octocat/Hello-World".to_owned(),
                },
                payload: Payload {
                    reference: "refs/heads/main".to_owned(),
                    commits: vec![
                        Commit {
                            message: "Fix all the bugs".to_owned(),
                        },
                        Commit {
                            message: "Release the thing".to_owned(),
                        },
                    ],
                    ..Payload::default()
                },
            }
        );
    }

    //a repository CreateEvent carries `"ref": null`; the decoded record
    //must come out with zero values, not an error
    #[test]
    fn decode_events_defaults_null_and_absent_fields() {
        let events = decode_events(USER_EVENTS_JSON.as_bytes()).unwrap();

        let created = &events[1];
        assert_eq!(created.event_type, "CreateEvent");
        assert_eq!(created.payload.reference, "");
        assert_eq!(created.payload.ref_type, "repository");

        let watched = &events[2];
        assert_eq!(watched.payload.action, "started");
        assert_eq!(watched.payload.commits, vec![]);
    }

    #[test]
    fn decode_events_keeps_unknown_kinds() {
        let events = decode_events(USER_EVENTS_JSON.as_bytes()).unwrap();
        assert_eq!(events[3].event_type, "SponsorshipEvent");
        assert_eq!(
            events[3].describe(),
            "SponsorshipEvent to octocat/Hello-World"
        );
    }

    #[test]
    fn decode_events_accepts_an_empty_page() {
        let events = decode_events("[]".as_bytes()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn decode_events_rejects_a_malformed_body() {
        let result = decode_events("Not Found".as_bytes());
        assert!(result.is_err());
    }
}
