//! Behavioural tests for the generated model types.

use std::str::FromStr;

use chrono::{TimeZone, Utc};
use s3sdk_model::request::{
    CompleteMultipartUploadRequest, DeleteBucketInventoryConfigurationRequest, GetObjectRequest,
    PutBucketReplicationRequest, PutObjectRequest,
};
use s3sdk_model::result::{GetObjectResult, ListObjectsV2Result};
use s3sdk_model::types::{
    CompletedMultipartUpload, CompletedPart, Destination, InventoryOptionalField, Object,
    ObjectCannedACL, ReplicationConfiguration, ReplicationRule, ReplicationRuleStatus, SSEKMS,
    ServerSideEncryption, StorageClass, Tag, Tier,
};
use s3sdk_model::{ParseEnumError, S3ErrorCode, S3Operation, StreamingBlob};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[test]
fn test_should_parse_known_wire_values() {
    assert_eq!(
        "aws:kms".parse::<ServerSideEncryption>(),
        Ok(ServerSideEncryption::AwsKms)
    );
    assert_eq!(
        StorageClass::from_str("GLACIER_IR"),
        Ok(StorageClass::GlacierIr)
    );
    assert_eq!("Expedited".parse::<Tier>(), Ok(Tier::Expedited));
}

#[test]
fn test_should_fail_on_unrecognized_wire_value() {
    assert_eq!(
        "SUPER_COLD".parse::<StorageClass>(),
        Err(ParseEnumError::Unknown {
            enum_name: "StorageClass",
            value: "SUPER_COLD".to_owned(),
        })
    );
    // Wire values are case-sensitive.
    assert!("glacier".parse::<StorageClass>().is_err());
}

#[test]
fn test_should_fail_on_empty_wire_value() {
    assert_eq!(
        "".parse::<ObjectCannedACL>(),
        Err(ParseEnumError::Empty {
            enum_name: "ObjectCannedACL"
        })
    );
}

#[test]
fn test_should_round_trip_every_declared_value() {
    for value in InventoryOptionalField::values() {
        assert_eq!(value.as_str().parse::<InventoryOptionalField>(), Ok(*value));
    }
    assert_eq!(InventoryOptionalField::values().len(), 15);
}

#[test]
fn test_should_display_wire_value() {
    assert_eq!(ObjectCannedACL::PublicRead.to_string(), "public-read");
    assert_eq!(ServerSideEncryption::Aes256.to_string(), "AES256");
}

#[test]
fn test_should_serialize_enum_with_wire_name() {
    let json = serde_json::to_string(&StorageClass::IntelligentTiering).ok();
    assert_eq!(json.as_deref(), Some("\"INTELLIGENT_TIERING\""));
    let parsed: Option<ServerSideEncryption> = serde_json::from_str("\"aws:kms:dsse\"").ok();
    assert_eq!(parsed, Some(ServerSideEncryption::AwsKmsDsse));
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

#[test]
fn test_should_return_what_setters_stored() {
    let expires = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).single();
    let mut request = PutObjectRequest::new("photos", "2024/cat.jpg")
        .with_content_type("image/jpeg")
        .with_content_length(1024)
        .with_acl(ObjectCannedACL::Private)
        .with_body("meow")
        .with_bucket_key_enabled(true);
    if let Some(expires) = expires {
        request = request.with_object_lock_retain_until_date(expires);
    }

    assert_eq!(request.bucket(), "photos");
    assert_eq!(request.key(), "2024/cat.jpg");
    assert_eq!(request.content_type(), Some("image/jpeg"));
    assert_eq!(request.content_length(), Some(1024));
    assert_eq!(request.acl(), Some(ObjectCannedACL::Private));
    assert_eq!(request.body(), Some(&StreamingBlob::from("meow")));
    assert_eq!(request.bucket_key_enabled(), Some(true));
    assert_eq!(request.object_lock_retain_until_date(), expires);
    assert_eq!(request.cache_control(), None);
}

#[test]
fn test_should_replace_list_on_with_call() {
    let upload = CompletedMultipartUpload::default()
        .with_parts([CompletedPart::default().with_part_number(1)])
        .with_parts([
            CompletedPart::default().with_part_number(2).with_e_tag("\"b\""),
            CompletedPart::default().with_part_number(3),
        ]);
    let numbers: Vec<_> = upload.parts().iter().filter_map(CompletedPart::part_number).collect();
    assert_eq!(numbers, vec![2, 3]);

    let request = CompleteMultipartUploadRequest::new("bucket", "key", "upload-1")
        .with_multipart_upload(upload);
    assert_eq!(request.upload_id(), "upload-1");
    assert_eq!(request.multipart_upload().map(|u| u.parts().len()), Some(2));
}

#[test]
fn test_should_compare_structs_field_wise() {
    let a = Object::default().with_key("a.txt").with_size(10);
    let b = Object::default().with_key("a.txt").with_size(10);
    assert_eq!(a, b);
    assert_ne!(a, b.clone().with_size(11));
    assert_ne!(
        Tag::new("env", "prod"),
        Tag::new("env", "dev"),
    );

    let listing = ListObjectsV2Result::default()
        .with_contents([a.clone()])
        .with_key_count(1);
    assert_eq!(listing.clone(), listing);
    assert_eq!(listing.contents(), &[a]);
}

#[test]
fn test_should_build_nested_replication_configuration() {
    let rule = ReplicationRule::new(
        Destination::new("arn:aws:s3:::backup").with_storage_class(StorageClass::Glacier),
        ReplicationRuleStatus::Enabled,
    )
    .with_id("backup-all")
    .with_priority(1);
    let config = ReplicationConfiguration::new("arn:aws:iam::123456789012:role/replication")
        .with_rules([rule]);
    let request = PutBucketReplicationRequest::new("source", config);

    let rules = request.replication_configuration().rules();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].status(), ReplicationRuleStatus::Enabled);
    assert_eq!(rules[0].destination().bucket(), "arn:aws:s3:::backup");
    assert_eq!(
        rules[0].destination().storage_class(),
        Some(StorageClass::Glacier)
    );
}

#[test]
fn test_should_take_configuration_id_as_required() {
    let request = DeleteBucketInventoryConfigurationRequest::new("bucket", "weekly-report")
        .with_expected_bucket_owner("123456789012");
    assert_eq!(request.id(), "weekly-report");
    assert_eq!(request.expected_bucket_owner(), Some("123456789012"));
}

// ---------------------------------------------------------------------------
// Map members
// ---------------------------------------------------------------------------

#[test]
fn test_should_add_metadata_entries() {
    let request = PutObjectRequest::new("bucket", "key")
        .add_metadata_entry("owner", "alice")
        .and_then(|r| r.add_metadata_entry("team", "storage"));
    let request = request.ok();
    assert_eq!(
        request
            .as_ref()
            .and_then(|r| r.metadata().get("owner"))
            .map(String::as_str),
        Some("alice")
    );
    assert_eq!(request.map(|r| r.metadata().len()), Some(2));
}

#[test]
fn test_should_reject_duplicate_metadata_key() {
    let result = PutObjectRequest::new("bucket", "key")
        .add_metadata_entry("owner", "alice")
        .and_then(|r| r.add_metadata_entry("owner", "bob"));
    let err = result.err();
    assert_eq!(err.as_ref().map(|e| e.key.as_str()), Some("owner"));
    assert_eq!(err.map(|e| e.field), Some("metadata"));
}

#[test]
fn test_should_clear_metadata_entries() {
    let result = GetObjectResult::default()
        .add_metadata_entry("a", "1")
        .map(GetObjectResult::clear_metadata_entries);
    assert_eq!(result.map(|r| r.metadata().is_empty()), Ok(true));
}

// ---------------------------------------------------------------------------
// Debug rendering
// ---------------------------------------------------------------------------

#[test]
fn test_should_redact_customer_key_in_debug() {
    let request = GetObjectRequest::new("bucket", "key")
        .with_sse_customer_algorithm("AES256")
        .with_sse_customer_key("c2VjcmV0LWtleQ==");
    let rendered = format!("{request:?}");
    assert!(rendered.contains("*** Sensitive Data Redacted ***"));
    assert!(!rendered.contains("c2VjcmV0LWtleQ=="));
    assert!(rendered.contains("AES256"));
}

#[test]
fn test_should_not_mark_unset_sensitive_member() {
    let rendered = format!("{:?}", GetObjectRequest::new("bucket", "key"));
    assert!(rendered.contains("sse_customer_key: None"));
}

#[test]
fn test_should_redact_required_sensitive_member() {
    let rendered = format!("{:?}", SSEKMS::new("arn:aws:kms:us-east-1:1:key/abc"));
    assert!(!rendered.contains("arn:aws:kms"));
}

// ---------------------------------------------------------------------------
// Operations and error codes
// ---------------------------------------------------------------------------

#[test]
fn test_should_resolve_operation_names() {
    assert_eq!(
        S3Operation::from_name("RestoreObject"),
        Some(S3Operation::RestoreObject)
    );
    assert_eq!(
        "ListBucketIntelligentTieringConfigurations".parse::<S3Operation>(),
        Ok(S3Operation::ListBucketIntelligentTieringConfigurations)
    );
    assert!("PostObject".parse::<S3Operation>().is_err());
    assert_eq!(S3Operation::PutBucketReplication.to_string(), "PutBucketReplication");
}

#[test]
fn test_should_list_every_operation_once() {
    let mut names: Vec<_> = S3Operation::ALL.iter().map(S3Operation::as_str).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
    assert_eq!(total, 91);
    for op in S3Operation::ALL {
        assert_eq!(S3Operation::from_name(op.as_str()), Some(*op));
    }
}

#[test]
fn test_should_know_which_operations_return_results() {
    assert!(S3Operation::GetObject.has_result());
    assert!(S3Operation::RestoreObject.has_result());
    assert!(!S3Operation::DeleteBucket.has_result());
    assert!(!S3Operation::PutBucketReplication.has_result());
}

#[test]
fn test_should_keep_unknown_error_codes() {
    assert_eq!(S3ErrorCode::from_code("NoSuchKey"), S3ErrorCode::NoSuchKey);
    let other = S3ErrorCode::from_code("SomethingNew");
    assert_eq!(other, S3ErrorCode::Other("SomethingNew".to_owned()));
    assert_eq!(other.as_str(), "SomethingNew");
    assert_eq!(
        S3ErrorCode::SlowDown.default_status_code(),
        http::StatusCode::SERVICE_UNAVAILABLE
    );
}

#[test]
fn test_should_map_missing_encryption_configuration_to_not_found() {
    let code = S3ErrorCode::from_code("ServerSideEncryptionConfigurationNotFoundError");
    assert_eq!(code, S3ErrorCode::ServerSideEncryptionConfigurationNotFoundError);
    assert_eq!(code.as_str(), "ServerSideEncryptionConfigurationNotFoundError");
    assert_eq!(code.default_status_code(), http::StatusCode::NOT_FOUND);
}
