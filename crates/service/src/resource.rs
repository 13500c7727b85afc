use chrono::{DateTime, FixedOffset};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::ValidationError;

pub type Friend = models::friend::Model;
pub type Post = models::post::Model;

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 120;

/// A stored document type: how its request body validates and how a record is
/// assembled from validated fields.
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Raw request body, every field optional.
    type Payload: DeserializeOwned + Send + 'static;
    /// Fields that passed validation.
    type Fields: Clone + Send + Sync + 'static;

    const NAME: &'static str;

    fn validate(payload: Self::Payload) -> Result<Self::Fields, ValidationError>;
    fn id(&self) -> Uuid;
    fn build(id: Uuid, created_at: DateTime<FixedOffset>, fields: Self::Fields) -> Self;
    fn apply(&mut self, fields: Self::Fields);
}

/// Body of `POST /friends` and `PUT /friends/:id`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// Body of `POST /posts` and `PUT /posts/:id`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub post_title: Option<String>,
    pub post_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub post_title: String,
    pub post_content: String,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// `null`, `false`, `0` and `""` count as not supplied.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn whole_age(value: &Value) -> Option<i32> {
    let n = match value {
        Value::Number(n) => n,
        _ => return None,
    };
    let age = match n.as_i64() {
        Some(i) => i,
        None => {
            let f = n.as_f64()?;
            if f.fract() != 0.0 {
                return None;
            }
            f as i64
        }
    };
    (MIN_AGE..=MAX_AGE).contains(&age).then_some(age as i32)
}

impl Resource for Friend {
    type Payload = FriendPayload;
    type Fields = FriendFields;

    const NAME: &'static str = "friend";

    fn validate(payload: FriendPayload) -> Result<FriendFields, ValidationError> {
        let age = payload.age.filter(truthy);
        let (Some(first_name), Some(last_name), Some(age)) =
            (present(payload.first_name), present(payload.last_name), age)
        else {
            return Err(ValidationError::MissingFields);
        };
        let age = whole_age(&age).ok_or(ValidationError::AgeOutOfRange)?;
        Ok(FriendFields { first_name, last_name, age })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn build(id: Uuid, created_at: DateTime<FixedOffset>, fields: FriendFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            age: fields.age,
            created_at,
        }
    }

    fn apply(&mut self, fields: FriendFields) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.age = fields.age;
    }
}

impl Resource for Post {
    type Payload = PostPayload;
    type Fields = PostFields;

    const NAME: &'static str = "post";

    fn validate(payload: PostPayload) -> Result<PostFields, ValidationError> {
        match (present(payload.post_title), present(payload.post_content)) {
            (Some(post_title), Some(post_content)) => Ok(PostFields { post_title, post_content }),
            _ => Err(ValidationError::MissingFields),
        }
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn build(id: Uuid, created_at: DateTime<FixedOffset>, fields: PostFields) -> Self {
        Self { id, post_title: fields.post_title, post_content: fields.post_content, created_at }
    }

    fn apply(&mut self, fields: PostFields) {
        self.post_title = fields.post_title;
        self.post_content = fields.post_content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn friend(body: Value) -> Result<FriendFields, ValidationError> {
        Friend::validate(serde_json::from_value(body).expect("payload shape"))
    }

    fn post(body: Value) -> Result<PostFields, ValidationError> {
        Post::validate(serde_json::from_value(body).expect("payload shape"))
    }

    #[test]
    fn friend_accepts_names_and_age_in_range() {
        let f = friend(json!({"firstName": "Ada", "lastName": "Lovelace", "age": 36})).unwrap();
        assert_eq!(f, FriendFields { first_name: "Ada".into(), last_name: "Lovelace".into(), age: 36 });
        assert_eq!(friend(json!({"firstName": "a", "lastName": "b", "age": 1})).unwrap().age, 1);
        assert_eq!(friend(json!({"firstName": "a", "lastName": "b", "age": 120})).unwrap().age, 120);
        assert_eq!(friend(json!({"firstName": "a", "lastName": "b", "age": 42.0})).unwrap().age, 42);
    }

    #[test]
    fn friend_missing_or_falsy_fields() {
        for body in [
            json!({}),
            json!({"lastName": "Lovelace", "age": 36}),
            json!({"firstName": "", "lastName": "Lovelace", "age": 36}),
            json!({"firstName": "Ada", "lastName": null, "age": 36}),
            json!({"firstName": "Ada", "lastName": "Lovelace"}),
            json!({"firstName": "Ada", "lastName": "Lovelace", "age": 0}),
            json!({"firstName": "Ada", "lastName": "Lovelace", "age": ""}),
            json!({"firstName": "Ada", "lastName": "Lovelace", "age": false}),
        ] {
            assert_eq!(friend(body.clone()), Err(ValidationError::MissingFields), "{body}");
        }
    }

    #[test]
    fn friend_age_must_be_whole_number_in_range() {
        for age in [json!(200), json!(121), json!(-3), json!(36.5), json!("36"), json!(true), json!([1])] {
            let body = json!({"firstName": "Ada", "lastName": "Lovelace", "age": age});
            assert_eq!(friend(body), Err(ValidationError::AgeOutOfRange), "age {age}");
        }
    }

    #[test]
    fn post_requires_title_and_content() {
        assert_eq!(
            post(json!({"postTitle": "Hi", "postContent": "there"})).unwrap(),
            PostFields { post_title: "Hi".into(), post_content: "there".into() }
        );
        assert_eq!(post(json!({"postTitle": "Hi"})), Err(ValidationError::MissingFields));
        assert_eq!(post(json!({"postTitle": "", "postContent": "x"})), Err(ValidationError::MissingFields));
    }

    #[test]
    fn records_serialize_in_camel_case() {
        let now: DateTime<FixedOffset> = chrono::Utc::now().into();
        let f = Friend::build(Uuid::nil(), now, FriendFields { first_name: "A".into(), last_name: "B".into(), age: 3 });
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["firstName"], "A");
        assert_eq!(v["lastName"], "B");
        assert_eq!(v["age"], 3);
        assert!(v.get("createdAt").is_some());

        let p = Post::build(Uuid::nil(), now, PostFields { post_title: "T".into(), post_content: "C".into() });
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["postTitle"], "T");
        assert_eq!(v["postContent"], "C");
    }
}
