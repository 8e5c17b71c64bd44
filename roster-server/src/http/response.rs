//! Success response shapes shared by the resource routes

use serde::Serialize;

/// A list of rows, or a hint message when there are none
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Rows(Vec<T>),
    Empty { message: &'static str },
}

impl<T> Listing<T> {
    pub fn new(rows: Vec<T>, empty_message: &'static str) -> Self {
        if rows.is_empty() {
            Self::Empty {
                message: empty_message,
            }
        } else {
            Self::Rows(rows)
        }
    }
}

/// `{"deletedRecords": n}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    pub deleted_records: u64,
}

/// `{"updatedRecords": n}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Updated {
    pub updated_records: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_shapes() {
        let rows = Listing::new(vec![1, 2], "none");
        assert_eq!(serde_json::to_value(rows).unwrap(), json!([1, 2]));

        let empty: Listing<i32> = Listing::new(vec![], "none");
        assert_eq!(
            serde_json::to_value(empty).unwrap(),
            json!({ "message": "none" })
        );
    }

    #[test]
    fn counts_are_camel_case() {
        let value = serde_json::to_value(Deleted { deleted_records: 1 }).unwrap();
        assert_eq!(value, json!({ "deletedRecords": 1 }));

        let value = serde_json::to_value(Updated { updated_records: 2 }).unwrap();
        assert_eq!(value, json!({ "updatedRecords": 2 }));
    }
}
