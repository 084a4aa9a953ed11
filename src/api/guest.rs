use rocket::FromForm;
use rocket::serde::Deserialize;
use tracing::warn;

use crate::model::provider::lenient_string;
use crate::model::tools::GuestCredential;

/// Multipart upload: one or more guest dump files under the `files` field.
#[derive(FromForm)]
pub struct GuestUpload<'r> {
    pub files: Vec<&'r [u8]>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
struct GuestDump {
    guest_account_info: Option<GuestAccountInfo>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
struct GuestAccountInfo {
    #[serde(rename = "com.garena.msdk.guest_uid", default, deserialize_with = "lenient_string")]
    uid: Option<String>,
    #[serde(rename = "com.garena.msdk.guest_password", default, deserialize_with = "lenient_string")]
    password: Option<String>,
}

/// Extracts uid/password pairs from uploaded guest dumps. A file that fails
/// to parse or lacks the msdk keys is skipped; one bad file never aborts
/// the batch.
pub fn combine_guest_files(files: &[&[u8]]) -> Vec<GuestCredential> {
    let mut combined = Vec::new();

    for (index, content) in files.iter().enumerate() {
        let dump: GuestDump = match serde_json::from_slice(content) {
            Ok(dump) => dump,
            Err(err) => {
                warn!(index, "skipping unparseable guest file: {err}");
                continue;
            }
        };
        let Some(info) = dump.guest_account_info else {
            continue;
        };
        if let (Some(uid), Some(password)) = (info.uid, info.password) {
            combined.push(GuestCredential { uid, password });
        }
    }

    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    static VALID: &[u8] = br#"{
        "guest_account_info": {
            "com.garena.msdk.guest_uid": "13371337",
            "com.garena.msdk.guest_password": "A1B2C3D4E5F6"
        }
    }"#;

    #[test]
    fn malformed_files_are_skipped_not_fatal() {
        let combined = combine_guest_files(&[VALID, b"not json at all"]);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].uid, "13371337");
        assert_eq!(combined[0].password, "A1B2C3D4E5F6");
    }

    #[test]
    fn files_without_msdk_keys_yield_nothing() {
        let missing_keys = br#"{"guest_account_info": {"other": "stuff"}}"#;
        let no_group = br#"{"something_else": 1}"#;
        assert!(combine_guest_files(&[missing_keys.as_slice(), no_group.as_slice()]).is_empty());
    }

    #[test]
    fn numeric_uid_is_stringified() {
        let numeric = br#"{
            "guest_account_info": {
                "com.garena.msdk.guest_uid": 13371337,
                "com.garena.msdk.guest_password": "A1B2C3D4E5F6"
            }
        }"#;
        let combined = combine_guest_files(&[numeric.as_slice()]);
        assert_eq!(combined[0].uid, "13371337");
    }
}
