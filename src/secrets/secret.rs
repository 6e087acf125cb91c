use crate::secrets::SecretWriteParams;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Secret as it's returned by the server for organization and repository secrets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    /// Server assigned identifier.
    pub id: i64,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    pub created_by: String,
    #[serde(with = "time::serde::timestamp")]
    pub updated_at: OffsetDateTime,
    pub updated_by: String,
    #[serde(flatten)]
    pub params: SecretWriteParams,
}

#[cfg(test)]
mod tests {
    use crate::{
        secrets::{Secret, SecretEvent, SecretType, SecretWriteParams},
        tests::mock_secret,
    };
    use insta::assert_json_snapshot;
    use time::OffsetDateTime;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(mock_secret()?, @r###"
        {
          "id": 42,
          "created_at": 1262340000,
          "created_by": "octocat",
          "updated_at": 1262343600,
          "updated_by": "octokitty",
          "org": "acme",
          "repo": "widgets",
          "team": null,
          "name": "API_KEY",
          "type": "repo",
          "images": [
            "alpine:latest",
            "golang:1.22"
          ],
          "events": [
            "push",
            "tag"
          ],
          "allow_command": false
        }
        "###);

        Ok(())
    }

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<Secret>(
                r#"
{
    "id": 7,
    "org": "acme",
    "repo": "widgets",
    "team": null,
    "name": "DOCKER_PASSWORD",
    "value": null,
    "type": "repo",
    "images": [],
    "events": ["deployment"],
    "allow_command": true,
    "created_at": 1262340000,
    "created_by": "octocat",
    "updated_at": 1262340000,
    "updated_by": "octocat"
}
          "#
            )?,
            Secret {
                id: 7,
                created_at: OffsetDateTime::from_unix_timestamp(1262340000)?,
                created_by: "octocat".to_string(),
                updated_at: OffsetDateTime::from_unix_timestamp(1262340000)?,
                updated_by: "octocat".to_string(),
                params: SecretWriteParams {
                    org: "acme".to_string(),
                    repo: "widgets".to_string(),
                    team: None,
                    name: "DOCKER_PASSWORD".to_string(),
                    value: None,
                    secret_type: SecretType::Repo,
                    images: vec![],
                    events: vec![SecretEvent::Deployment],
                    allow_command: true,
                },
            }
        );

        Ok(())
    }
}
