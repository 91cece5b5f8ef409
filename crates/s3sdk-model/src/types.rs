//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::exception::ParseEnumError;

/// Rendered in place of sensitive members by `Debug` implementations.
pub(crate) const SENSITIVE_DATA_REDACTED: &str = "*** Sensitive Data Redacted ***";

/// S3 AnalyticsS3ExportFileFormat enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalyticsS3ExportFileFormat {
    /// Default variant.
    #[default]
    #[serde(rename = "CSV")]
    Csv,
}

impl AnalyticsS3ExportFileFormat {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Csv]
    }
}

impl fmt::Display for AnalyticsS3ExportFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsS3ExportFileFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CSV" => Ok(Self::Csv),
            _ => Err(ParseEnumError::new("AnalyticsS3ExportFileFormat", s)),
        }
    }
}

/// S3 ArchiveStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArchiveStatus {
    /// Default variant.
    #[default]
    #[serde(rename = "ARCHIVE_ACCESS")]
    ArchiveAccess,
    #[serde(rename = "DEEP_ARCHIVE_ACCESS")]
    DeepArchiveAccess,
}

impl ArchiveStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ArchiveAccess => "ARCHIVE_ACCESS",
            Self::DeepArchiveAccess => "DEEP_ARCHIVE_ACCESS",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::ArchiveAccess, Self::DeepArchiveAccess]
    }
}

impl fmt::Display for ArchiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchiveStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARCHIVE_ACCESS" => Ok(Self::ArchiveAccess),
            "DEEP_ARCHIVE_ACCESS" => Ok(Self::DeepArchiveAccess),
            _ => Err(ParseEnumError::new("ArchiveStatus", s)),
        }
    }
}

/// S3 BucketAccelerateStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BucketAccelerateStatus {
    /// Default variant.
    #[default]
    Enabled,
    Suspended,
}

impl BucketAccelerateStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Suspended => "Suspended",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Enabled, Self::Suspended]
    }
}

impl fmt::Display for BucketAccelerateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketAccelerateStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enabled" => Ok(Self::Enabled),
            "Suspended" => Ok(Self::Suspended),
            _ => Err(ParseEnumError::new("BucketAccelerateStatus", s)),
        }
    }
}

/// S3 BucketCannedACL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BucketCannedACL {
    /// Default variant.
    #[default]
    #[serde(rename = "authenticated-read")]
    AuthenticatedRead,
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "public-read")]
    PublicRead,
    #[serde(rename = "public-read-write")]
    PublicReadWrite,
}

impl BucketCannedACL {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticatedRead => "authenticated-read",
            Self::Private => "private",
            Self::PublicRead => "public-read",
            Self::PublicReadWrite => "public-read-write",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::AuthenticatedRead, Self::Private, Self::PublicRead, Self::PublicReadWrite]
    }
}

impl fmt::Display for BucketCannedACL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketCannedACL {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authenticated-read" => Ok(Self::AuthenticatedRead),
            "private" => Ok(Self::Private),
            "public-read" => Ok(Self::PublicRead),
            "public-read-write" => Ok(Self::PublicReadWrite),
            _ => Err(ParseEnumError::new("BucketCannedACL", s)),
        }
    }
}

/// S3 BucketLocationConstraint enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BucketLocationConstraint {
    /// Default variant.
    #[default]
    #[serde(rename = "af-south-1")]
    AfSouth1,
    #[serde(rename = "ap-east-1")]
    ApEast1,
    #[serde(rename = "ap-northeast-1")]
    ApNortheast1,
    #[serde(rename = "ap-northeast-2")]
    ApNortheast2,
    #[serde(rename = "ap-northeast-3")]
    ApNortheast3,
    #[serde(rename = "ap-south-1")]
    ApSouth1,
    #[serde(rename = "ap-south-2")]
    ApSouth2,
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
    #[serde(rename = "ap-southeast-2")]
    ApSoutheast2,
    #[serde(rename = "ap-southeast-3")]
    ApSoutheast3,
    #[serde(rename = "ap-southeast-4")]
    ApSoutheast4,
    #[serde(rename = "ap-southeast-5")]
    ApSoutheast5,
    #[serde(rename = "ca-central-1")]
    CaCentral1,
    #[serde(rename = "cn-north-1")]
    CnNorth1,
    #[serde(rename = "cn-northwest-1")]
    CnNorthwest1,
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "eu-central-2")]
    EuCentral2,
    #[serde(rename = "eu-north-1")]
    EuNorth1,
    #[serde(rename = "eu-south-1")]
    EuSouth1,
    #[serde(rename = "eu-south-2")]
    EuSouth2,
    #[serde(rename = "eu-west-1")]
    EuWest1,
    #[serde(rename = "eu-west-2")]
    EuWest2,
    #[serde(rename = "eu-west-3")]
    EuWest3,
    #[serde(rename = "il-central-1")]
    IlCentral1,
    #[serde(rename = "me-central-1")]
    MeCentral1,
    #[serde(rename = "me-south-1")]
    MeSouth1,
    #[serde(rename = "sa-east-1")]
    SaEast1,
    #[serde(rename = "us-east-2")]
    UsEast2,
    #[serde(rename = "us-gov-east-1")]
    UsGovEast1,
    #[serde(rename = "us-gov-west-1")]
    UsGovWest1,
    #[serde(rename = "us-west-1")]
    UsWest1,
    #[serde(rename = "us-west-2")]
    UsWest2,
}

impl BucketLocationConstraint {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AfSouth1 => "af-south-1",
            Self::ApEast1 => "ap-east-1",
            Self::ApNortheast1 => "ap-northeast-1",
            Self::ApNortheast2 => "ap-northeast-2",
            Self::ApNortheast3 => "ap-northeast-3",
            Self::ApSouth1 => "ap-south-1",
            Self::ApSouth2 => "ap-south-2",
            Self::ApSoutheast1 => "ap-southeast-1",
            Self::ApSoutheast2 => "ap-southeast-2",
            Self::ApSoutheast3 => "ap-southeast-3",
            Self::ApSoutheast4 => "ap-southeast-4",
            Self::ApSoutheast5 => "ap-southeast-5",
            Self::CaCentral1 => "ca-central-1",
            Self::CnNorth1 => "cn-north-1",
            Self::CnNorthwest1 => "cn-northwest-1",
            Self::Eu => "EU",
            Self::EuCentral1 => "eu-central-1",
            Self::EuCentral2 => "eu-central-2",
            Self::EuNorth1 => "eu-north-1",
            Self::EuSouth1 => "eu-south-1",
            Self::EuSouth2 => "eu-south-2",
            Self::EuWest1 => "eu-west-1",
            Self::EuWest2 => "eu-west-2",
            Self::EuWest3 => "eu-west-3",
            Self::IlCentral1 => "il-central-1",
            Self::MeCentral1 => "me-central-1",
            Self::MeSouth1 => "me-south-1",
            Self::SaEast1 => "sa-east-1",
            Self::UsEast2 => "us-east-2",
            Self::UsGovEast1 => "us-gov-east-1",
            Self::UsGovWest1 => "us-gov-west-1",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[
            Self::AfSouth1,
            Self::ApEast1,
            Self::ApNortheast1,
            Self::ApNortheast2,
            Self::ApNortheast3,
            Self::ApSouth1,
            Self::ApSouth2,
            Self::ApSoutheast1,
            Self::ApSoutheast2,
            Self::ApSoutheast3,
            Self::ApSoutheast4,
            Self::ApSoutheast5,
            Self::CaCentral1,
            Self::CnNorth1,
            Self::CnNorthwest1,
            Self::Eu,
            Self::EuCentral1,
            Self::EuCentral2,
            Self::EuNorth1,
            Self::EuSouth1,
            Self::EuSouth2,
            Self::EuWest1,
            Self::EuWest2,
            Self::EuWest3,
            Self::IlCentral1,
            Self::MeCentral1,
            Self::MeSouth1,
            Self::SaEast1,
            Self::UsEast2,
            Self::UsGovEast1,
            Self::UsGovWest1,
            Self::UsWest1,
            Self::UsWest2,
        ]
    }
}

impl fmt::Display for BucketLocationConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketLocationConstraint {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "af-south-1" => Ok(Self::AfSouth1),
            "ap-east-1" => Ok(Self::ApEast1),
            "ap-northeast-1" => Ok(Self::ApNortheast1),
            "ap-northeast-2" => Ok(Self::ApNortheast2),
            "ap-northeast-3" => Ok(Self::ApNortheast3),
            "ap-south-1" => Ok(Self::ApSouth1),
            "ap-south-2" => Ok(Self::ApSouth2),
            "ap-southeast-1" => Ok(Self::ApSoutheast1),
            "ap-southeast-2" => Ok(Self::ApSoutheast2),
            "ap-southeast-3" => Ok(Self::ApSoutheast3),
            "ap-southeast-4" => Ok(Self::ApSoutheast4),
            "ap-southeast-5" => Ok(Self::ApSoutheast5),
            "ca-central-1" => Ok(Self::CaCentral1),
            "cn-north-1" => Ok(Self::CnNorth1),
            "cn-northwest-1" => Ok(Self::CnNorthwest1),
            "EU" => Ok(Self::Eu),
            "eu-central-1" => Ok(Self::EuCentral1),
            "eu-central-2" => Ok(Self::EuCentral2),
            "eu-north-1" => Ok(Self::EuNorth1),
            "eu-south-1" => Ok(Self::EuSouth1),
            "eu-south-2" => Ok(Self::EuSouth2),
            "eu-west-1" => Ok(Self::EuWest1),
            "eu-west-2" => Ok(Self::EuWest2),
            "eu-west-3" => Ok(Self::EuWest3),
            "il-central-1" => Ok(Self::IlCentral1),
            "me-central-1" => Ok(Self::MeCentral1),
            "me-south-1" => Ok(Self::MeSouth1),
            "sa-east-1" => Ok(Self::SaEast1),
            "us-east-2" => Ok(Self::UsEast2),
            "us-gov-east-1" => Ok(Self::UsGovEast1),
            "us-gov-west-1" => Ok(Self::UsGovWest1),
            "us-west-1" => Ok(Self::UsWest1),
            "us-west-2" => Ok(Self::UsWest2),
            _ => Err(ParseEnumError::new("BucketLocationConstraint", s)),
        }
    }
}

/// S3 BucketLogsPermission enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BucketLogsPermission {
    /// Default variant.
    #[default]
    #[serde(rename = "FULL_CONTROL")]
    FullControl,
    #[serde(rename = "READ")]
    Read,
    #[serde(rename = "WRITE")]
    Write,
}

impl BucketLogsPermission {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullControl => "FULL_CONTROL",
            Self::Read => "READ",
            Self::Write => "WRITE",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::FullControl, Self::Read, Self::Write]
    }
}

impl fmt::Display for BucketLogsPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketLogsPermission {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FULL_CONTROL" => Ok(Self::FullControl),
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            _ => Err(ParseEnumError::new("BucketLogsPermission", s)),
        }
    }
}

/// S3 BucketType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BucketType {
    /// Default variant.
    #[default]
    Directory,
}

impl BucketType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "Directory",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Directory]
    }
}

impl fmt::Display for BucketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Directory" => Ok(Self::Directory),
            _ => Err(ParseEnumError::new("BucketType", s)),
        }
    }
}

/// S3 BucketVersioningStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BucketVersioningStatus {
    /// Default variant.
    #[default]
    Enabled,
    Suspended,
}

impl BucketVersioningStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Suspended => "Suspended",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Enabled, Self::Suspended]
    }
}

impl fmt::Display for BucketVersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketVersioningStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enabled" => Ok(Self::Enabled),
            "Suspended" => Ok(Self::Suspended),
            _ => Err(ParseEnumError::new("BucketVersioningStatus", s)),
        }
    }
}

/// S3 ChecksumAlgorithm enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChecksumAlgorithm {
    /// Default variant.
    #[default]
    #[serde(rename = "CRC32")]
    Crc32,
    #[serde(rename = "CRC32C")]
    Crc32c,
    #[serde(rename = "CRC64NVME")]
    Crc64nvme,
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
}

impl ChecksumAlgorithm {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Crc32 => "CRC32",
            Self::Crc32c => "CRC32C",
            Self::Crc64nvme => "CRC64NVME",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Crc32, Self::Crc32c, Self::Crc64nvme, Self::Sha1, Self::Sha256]
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChecksumAlgorithm {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRC32" => Ok(Self::Crc32),
            "CRC32C" => Ok(Self::Crc32c),
            "CRC64NVME" => Ok(Self::Crc64nvme),
            "SHA1" => Ok(Self::Sha1),
            "SHA256" => Ok(Self::Sha256),
            _ => Err(ParseEnumError::new("ChecksumAlgorithm", s)),
        }
    }
}

/// S3 ChecksumMode enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChecksumMode {
    /// Default variant.
    #[default]
    #[serde(rename = "ENABLED")]
    Enabled,
}

impl ChecksumMode {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "ENABLED",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Enabled]
    }
}

impl fmt::Display for ChecksumMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChecksumMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENABLED" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("ChecksumMode", s)),
        }
    }
}

/// S3 ChecksumType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChecksumType {
    /// Default variant.
    #[default]
    #[serde(rename = "COMPOSITE")]
    Composite,
    #[serde(rename = "FULL_OBJECT")]
    FullObject,
}

impl ChecksumType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Composite => "COMPOSITE",
            Self::FullObject => "FULL_OBJECT",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Composite, Self::FullObject]
    }
}

impl fmt::Display for ChecksumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChecksumType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPOSITE" => Ok(Self::Composite),
            "FULL_OBJECT" => Ok(Self::FullObject),
            _ => Err(ParseEnumError::new("ChecksumType", s)),
        }
    }
}

/// S3 CompressionType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompressionType {
    /// Default variant.
    #[default]
    #[serde(rename = "BZIP2")]
    Bzip2,
    #[serde(rename = "GZIP")]
    Gzip,
    #[serde(rename = "NONE")]
    None,
}

impl CompressionType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bzip2 => "BZIP2",
            Self::Gzip => "GZIP",
            Self::None => "NONE",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Bzip2, Self::Gzip, Self::None]
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BZIP2" => Ok(Self::Bzip2),
            "GZIP" => Ok(Self::Gzip),
            "NONE" => Ok(Self::None),
            _ => Err(ParseEnumError::new("CompressionType", s)),
        }
    }
}

/// S3 DataRedundancy enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataRedundancy {
    /// Default variant.
    #[default]
    SingleAvailabilityZone,
    SingleLocalZone,
}

impl DataRedundancy {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleAvailabilityZone => "SingleAvailabilityZone",
            Self::SingleLocalZone => "SingleLocalZone",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::SingleAvailabilityZone, Self::SingleLocalZone]
    }
}

impl fmt::Display for DataRedundancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataRedundancy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SingleAvailabilityZone" => Ok(Self::SingleAvailabilityZone),
            "SingleLocalZone" => Ok(Self::SingleLocalZone),
            _ => Err(ParseEnumError::new("DataRedundancy", s)),
        }
    }
}

/// S3 DeleteMarkerReplicationStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeleteMarkerReplicationStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl DeleteMarkerReplicationStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for DeleteMarkerReplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeleteMarkerReplicationStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("DeleteMarkerReplicationStatus", s)),
        }
    }
}

/// S3 EncodingType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EncodingType {
    /// Default variant.
    #[default]
    #[serde(rename = "url")]
    Url,
}

impl EncodingType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Url]
    }
}

impl fmt::Display for EncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(Self::Url),
            _ => Err(ParseEnumError::new("EncodingType", s)),
        }
    }
}

/// S3 EncryptionType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EncryptionType {
    /// Default variant.
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "SSE-C")]
    SseC,
}

impl EncryptionType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::SseC => "SSE-C",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::None, Self::SseC]
    }
}

impl fmt::Display for EncryptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncryptionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "SSE-C" => Ok(Self::SseC),
            _ => Err(ParseEnumError::new("EncryptionType", s)),
        }
    }
}

/// S3 Event enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Event {
    /// Default variant.
    #[default]
    #[serde(rename = "s3:IntelligentTiering")]
    S3IntelligentTiering,
    #[serde(rename = "s3:LifecycleExpiration:*")]
    S3LifecycleExpiration,
    #[serde(rename = "s3:LifecycleExpiration:Delete")]
    S3LifecycleExpirationDelete,
    #[serde(rename = "s3:LifecycleTransition")]
    S3LifecycleTransition,
    #[serde(rename = "s3:ObjectAcl:Put")]
    S3ObjectAclPut,
    #[serde(rename = "s3:ObjectCreated:*")]
    S3ObjectCreated,
    #[serde(rename = "s3:ObjectCreated:Copy")]
    S3ObjectCreatedCopy,
    #[serde(rename = "s3:ObjectCreated:Post")]
    S3ObjectCreatedPost,
    #[serde(rename = "s3:ObjectCreated:Put")]
    S3ObjectCreatedPut,
    #[serde(rename = "s3:ObjectRemoved:*")]
    S3ObjectRemoved,
    #[serde(rename = "s3:ObjectRemoved:Delete")]
    S3ObjectRemovedDelete,
    #[serde(rename = "s3:ObjectRemoved:DeleteMarkerCreated")]
    S3ObjectRemovedDeleteMarkerCreated,
    #[serde(rename = "s3:ObjectRestore:*")]
    S3ObjectRestore,
    #[serde(rename = "s3:ObjectRestore:Completed")]
    S3ObjectRestoreCompleted,
    #[serde(rename = "s3:ObjectRestore:Delete")]
    S3ObjectRestoreDelete,
    #[serde(rename = "s3:ObjectRestore:Post")]
    S3ObjectRestorePost,
    #[serde(rename = "s3:ObjectTagging:*")]
    S3ObjectTagging,
    #[serde(rename = "s3:ObjectTagging:Delete")]
    S3ObjectTaggingDelete,
    #[serde(rename = "s3:ObjectTagging:Put")]
    S3ObjectTaggingPut,
    #[serde(rename = "s3:ReducedRedundancyLostObject")]
    S3ReducedRedundancyLostObject,
    #[serde(rename = "s3:Replication:*")]
    S3Replication,
    #[serde(rename = "s3:Replication:OperationNotTracked")]
    S3ReplicationOperationNotTracked,
}

impl Event {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::S3IntelligentTiering => "s3:IntelligentTiering",
            Self::S3LifecycleExpiration => "s3:LifecycleExpiration:*",
            Self::S3LifecycleExpirationDelete => "s3:LifecycleExpiration:Delete",
            Self::S3LifecycleTransition => "s3:LifecycleTransition",
            Self::S3ObjectAclPut => "s3:ObjectAcl:Put",
            Self::S3ObjectCreated => "s3:ObjectCreated:*",
            Self::S3ObjectCreatedCopy => "s3:ObjectCreated:Copy",
            Self::S3ObjectCreatedPost => "s3:ObjectCreated:Post",
            Self::S3ObjectCreatedPut => "s3:ObjectCreated:Put",
            Self::S3ObjectRemoved => "s3:ObjectRemoved:*",
            Self::S3ObjectRemovedDelete => "s3:ObjectRemoved:Delete",
            Self::S3ObjectRemovedDeleteMarkerCreated => "s3:ObjectRemoved:DeleteMarkerCreated",
            Self::S3ObjectRestore => "s3:ObjectRestore:*",
            Self::S3ObjectRestoreCompleted => "s3:ObjectRestore:Completed",
            Self::S3ObjectRestoreDelete => "s3:ObjectRestore:Delete",
            Self::S3ObjectRestorePost => "s3:ObjectRestore:Post",
            Self::S3ObjectTagging => "s3:ObjectTagging:*",
            Self::S3ObjectTaggingDelete => "s3:ObjectTagging:Delete",
            Self::S3ObjectTaggingPut => "s3:ObjectTagging:Put",
            Self::S3ReducedRedundancyLostObject => "s3:ReducedRedundancyLostObject",
            Self::S3Replication => "s3:Replication:*",
            Self::S3ReplicationOperationNotTracked => "s3:Replication:OperationNotTracked",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[
            Self::S3IntelligentTiering,
            Self::S3LifecycleExpiration,
            Self::S3LifecycleExpirationDelete,
            Self::S3LifecycleTransition,
            Self::S3ObjectAclPut,
            Self::S3ObjectCreated,
            Self::S3ObjectCreatedCopy,
            Self::S3ObjectCreatedPost,
            Self::S3ObjectCreatedPut,
            Self::S3ObjectRemoved,
            Self::S3ObjectRemovedDelete,
            Self::S3ObjectRemovedDeleteMarkerCreated,
            Self::S3ObjectRestore,
            Self::S3ObjectRestoreCompleted,
            Self::S3ObjectRestoreDelete,
            Self::S3ObjectRestorePost,
            Self::S3ObjectTagging,
            Self::S3ObjectTaggingDelete,
            Self::S3ObjectTaggingPut,
            Self::S3ReducedRedundancyLostObject,
            Self::S3Replication,
            Self::S3ReplicationOperationNotTracked,
        ]
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Event {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s3:IntelligentTiering" => Ok(Self::S3IntelligentTiering),
            "s3:LifecycleExpiration:*" => Ok(Self::S3LifecycleExpiration),
            "s3:LifecycleExpiration:Delete" => Ok(Self::S3LifecycleExpirationDelete),
            "s3:LifecycleTransition" => Ok(Self::S3LifecycleTransition),
            "s3:ObjectAcl:Put" => Ok(Self::S3ObjectAclPut),
            "s3:ObjectCreated:*" => Ok(Self::S3ObjectCreated),
            "s3:ObjectCreated:Copy" => Ok(Self::S3ObjectCreatedCopy),
            "s3:ObjectCreated:Post" => Ok(Self::S3ObjectCreatedPost),
            "s3:ObjectCreated:Put" => Ok(Self::S3ObjectCreatedPut),
            "s3:ObjectRemoved:*" => Ok(Self::S3ObjectRemoved),
            "s3:ObjectRemoved:Delete" => Ok(Self::S3ObjectRemovedDelete),
            "s3:ObjectRemoved:DeleteMarkerCreated" => Ok(Self::S3ObjectRemovedDeleteMarkerCreated),
            "s3:ObjectRestore:*" => Ok(Self::S3ObjectRestore),
            "s3:ObjectRestore:Completed" => Ok(Self::S3ObjectRestoreCompleted),
            "s3:ObjectRestore:Delete" => Ok(Self::S3ObjectRestoreDelete),
            "s3:ObjectRestore:Post" => Ok(Self::S3ObjectRestorePost),
            "s3:ObjectTagging:*" => Ok(Self::S3ObjectTagging),
            "s3:ObjectTagging:Delete" => Ok(Self::S3ObjectTaggingDelete),
            "s3:ObjectTagging:Put" => Ok(Self::S3ObjectTaggingPut),
            "s3:ReducedRedundancyLostObject" => Ok(Self::S3ReducedRedundancyLostObject),
            "s3:Replication:*" => Ok(Self::S3Replication),
            "s3:Replication:OperationNotTracked" => Ok(Self::S3ReplicationOperationNotTracked),
            _ => Err(ParseEnumError::new("Event", s)),
        }
    }
}

/// S3 ExistingObjectReplicationStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExistingObjectReplicationStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl ExistingObjectReplicationStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for ExistingObjectReplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExistingObjectReplicationStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("ExistingObjectReplicationStatus", s)),
        }
    }
}

/// S3 ExpirationStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExpirationStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl ExpirationStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpirationStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("ExpirationStatus", s)),
        }
    }
}

/// S3 ExpressionType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExpressionType {
    /// Default variant.
    #[default]
    #[serde(rename = "SQL")]
    Sql,
}

impl ExpressionType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sql => "SQL",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Sql]
    }
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpressionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SQL" => Ok(Self::Sql),
            _ => Err(ParseEnumError::new("ExpressionType", s)),
        }
    }
}

/// S3 FileHeaderInfo enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FileHeaderInfo {
    /// Default variant.
    #[default]
    #[serde(rename = "IGNORE")]
    Ignore,
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "USE")]
    Use,
}

impl FileHeaderInfo {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "IGNORE",
            Self::None => "NONE",
            Self::Use => "USE",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Ignore, Self::None, Self::Use]
    }
}

impl fmt::Display for FileHeaderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileHeaderInfo {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IGNORE" => Ok(Self::Ignore),
            "NONE" => Ok(Self::None),
            "USE" => Ok(Self::Use),
            _ => Err(ParseEnumError::new("FileHeaderInfo", s)),
        }
    }
}

/// S3 FilterRuleName enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterRuleName {
    /// Default variant.
    #[default]
    #[serde(rename = "prefix")]
    Prefix,
    #[serde(rename = "suffix")]
    Suffix,
}

impl FilterRuleName {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Prefix, Self::Suffix]
    }
}

impl fmt::Display for FilterRuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterRuleName {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix" => Ok(Self::Prefix),
            "suffix" => Ok(Self::Suffix),
            _ => Err(ParseEnumError::new("FilterRuleName", s)),
        }
    }
}

/// S3 IntelligentTieringAccessTier enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IntelligentTieringAccessTier {
    /// Default variant.
    #[default]
    #[serde(rename = "ARCHIVE_ACCESS")]
    ArchiveAccess,
    #[serde(rename = "DEEP_ARCHIVE_ACCESS")]
    DeepArchiveAccess,
}

impl IntelligentTieringAccessTier {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ArchiveAccess => "ARCHIVE_ACCESS",
            Self::DeepArchiveAccess => "DEEP_ARCHIVE_ACCESS",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::ArchiveAccess, Self::DeepArchiveAccess]
    }
}

impl fmt::Display for IntelligentTieringAccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntelligentTieringAccessTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARCHIVE_ACCESS" => Ok(Self::ArchiveAccess),
            "DEEP_ARCHIVE_ACCESS" => Ok(Self::DeepArchiveAccess),
            _ => Err(ParseEnumError::new("IntelligentTieringAccessTier", s)),
        }
    }
}

/// S3 IntelligentTieringStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IntelligentTieringStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl IntelligentTieringStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for IntelligentTieringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntelligentTieringStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("IntelligentTieringStatus", s)),
        }
    }
}

/// S3 InventoryFormat enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InventoryFormat {
    /// Default variant.
    #[default]
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "ORC")]
    Orc,
    Parquet,
}

impl InventoryFormat {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Orc => "ORC",
            Self::Parquet => "Parquet",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Csv, Self::Orc, Self::Parquet]
    }
}

impl fmt::Display for InventoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InventoryFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CSV" => Ok(Self::Csv),
            "ORC" => Ok(Self::Orc),
            "Parquet" => Ok(Self::Parquet),
            _ => Err(ParseEnumError::new("InventoryFormat", s)),
        }
    }
}

/// S3 InventoryFrequency enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InventoryFrequency {
    /// Default variant.
    #[default]
    Daily,
    Weekly,
}

impl InventoryFrequency {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Daily, Self::Weekly]
    }
}

impl fmt::Display for InventoryFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InventoryFrequency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" => Ok(Self::Daily),
            "Weekly" => Ok(Self::Weekly),
            _ => Err(ParseEnumError::new("InventoryFrequency", s)),
        }
    }
}

/// S3 InventoryIncludedObjectVersions enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InventoryIncludedObjectVersions {
    /// Default variant.
    #[default]
    All,
    Current,
}

impl InventoryIncludedObjectVersions {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Current => "Current",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::All, Self::Current]
    }
}

impl fmt::Display for InventoryIncludedObjectVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InventoryIncludedObjectVersions {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(Self::All),
            "Current" => Ok(Self::Current),
            _ => Err(ParseEnumError::new("InventoryIncludedObjectVersions", s)),
        }
    }
}

/// S3 InventoryOptionalField enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InventoryOptionalField {
    /// Default variant.
    #[default]
    BucketKeyStatus,
    ChecksumAlgorithm,
    ETag,
    EncryptionStatus,
    IntelligentTieringAccessTier,
    IsMultipartUploaded,
    LastModifiedDate,
    ObjectAccessControlList,
    ObjectLockLegalHoldStatus,
    ObjectLockMode,
    ObjectLockRetainUntilDate,
    ObjectOwner,
    ReplicationStatus,
    Size,
    StorageClass,
}

impl InventoryOptionalField {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BucketKeyStatus => "BucketKeyStatus",
            Self::ChecksumAlgorithm => "ChecksumAlgorithm",
            Self::ETag => "ETag",
            Self::EncryptionStatus => "EncryptionStatus",
            Self::IntelligentTieringAccessTier => "IntelligentTieringAccessTier",
            Self::IsMultipartUploaded => "IsMultipartUploaded",
            Self::LastModifiedDate => "LastModifiedDate",
            Self::ObjectAccessControlList => "ObjectAccessControlList",
            Self::ObjectLockLegalHoldStatus => "ObjectLockLegalHoldStatus",
            Self::ObjectLockMode => "ObjectLockMode",
            Self::ObjectLockRetainUntilDate => "ObjectLockRetainUntilDate",
            Self::ObjectOwner => "ObjectOwner",
            Self::ReplicationStatus => "ReplicationStatus",
            Self::Size => "Size",
            Self::StorageClass => "StorageClass",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[
            Self::BucketKeyStatus,
            Self::ChecksumAlgorithm,
            Self::ETag,
            Self::EncryptionStatus,
            Self::IntelligentTieringAccessTier,
            Self::IsMultipartUploaded,
            Self::LastModifiedDate,
            Self::ObjectAccessControlList,
            Self::ObjectLockLegalHoldStatus,
            Self::ObjectLockMode,
            Self::ObjectLockRetainUntilDate,
            Self::ObjectOwner,
            Self::ReplicationStatus,
            Self::Size,
            Self::StorageClass,
        ]
    }
}

impl fmt::Display for InventoryOptionalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InventoryOptionalField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BucketKeyStatus" => Ok(Self::BucketKeyStatus),
            "ChecksumAlgorithm" => Ok(Self::ChecksumAlgorithm),
            "ETag" => Ok(Self::ETag),
            "EncryptionStatus" => Ok(Self::EncryptionStatus),
            "IntelligentTieringAccessTier" => Ok(Self::IntelligentTieringAccessTier),
            "IsMultipartUploaded" => Ok(Self::IsMultipartUploaded),
            "LastModifiedDate" => Ok(Self::LastModifiedDate),
            "ObjectAccessControlList" => Ok(Self::ObjectAccessControlList),
            "ObjectLockLegalHoldStatus" => Ok(Self::ObjectLockLegalHoldStatus),
            "ObjectLockMode" => Ok(Self::ObjectLockMode),
            "ObjectLockRetainUntilDate" => Ok(Self::ObjectLockRetainUntilDate),
            "ObjectOwner" => Ok(Self::ObjectOwner),
            "ReplicationStatus" => Ok(Self::ReplicationStatus),
            "Size" => Ok(Self::Size),
            "StorageClass" => Ok(Self::StorageClass),
            _ => Err(ParseEnumError::new("InventoryOptionalField", s)),
        }
    }
}

/// S3 JSONType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JSONType {
    /// Default variant.
    #[default]
    #[serde(rename = "DOCUMENT")]
    Document,
    #[serde(rename = "LINES")]
    Lines,
}

impl JSONType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Lines => "LINES",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Document, Self::Lines]
    }
}

impl fmt::Display for JSONType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JSONType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DOCUMENT" => Ok(Self::Document),
            "LINES" => Ok(Self::Lines),
            _ => Err(ParseEnumError::new("JSONType", s)),
        }
    }
}

/// S3 LocationType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocationType {
    /// Default variant.
    #[default]
    AvailabilityZone,
    LocalZone,
}

impl LocationType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AvailabilityZone => "AvailabilityZone",
            Self::LocalZone => "LocalZone",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::AvailabilityZone, Self::LocalZone]
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AvailabilityZone" => Ok(Self::AvailabilityZone),
            "LocalZone" => Ok(Self::LocalZone),
            _ => Err(ParseEnumError::new("LocationType", s)),
        }
    }
}

/// S3 MFADelete enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MFADelete {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl MFADelete {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for MFADelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MFADelete {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("MFADelete", s)),
        }
    }
}

/// S3 MFADeleteStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MFADeleteStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl MFADeleteStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for MFADeleteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MFADeleteStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("MFADeleteStatus", s)),
        }
    }
}

/// S3 MetadataDirective enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetadataDirective {
    /// Default variant.
    #[default]
    #[serde(rename = "COPY")]
    Copy,
    #[serde(rename = "REPLACE")]
    Replace,
}

impl MetadataDirective {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "COPY",
            Self::Replace => "REPLACE",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Copy, Self::Replace]
    }
}

impl fmt::Display for MetadataDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataDirective {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COPY" => Ok(Self::Copy),
            "REPLACE" => Ok(Self::Replace),
            _ => Err(ParseEnumError::new("MetadataDirective", s)),
        }
    }
}

/// S3 MetricsStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetricsStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl MetricsStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for MetricsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricsStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("MetricsStatus", s)),
        }
    }
}

/// S3 ObjectAttributes enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectAttributes {
    /// Default variant.
    #[default]
    Checksum,
    #[serde(rename = "ETag")]
    Etag,
    ObjectParts,
    ObjectSize,
    StorageClass,
}

impl ObjectAttributes {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Checksum => "Checksum",
            Self::Etag => "ETag",
            Self::ObjectParts => "ObjectParts",
            Self::ObjectSize => "ObjectSize",
            Self::StorageClass => "StorageClass",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Checksum, Self::Etag, Self::ObjectParts, Self::ObjectSize, Self::StorageClass]
    }
}

impl fmt::Display for ObjectAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectAttributes {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Checksum" => Ok(Self::Checksum),
            "ETag" => Ok(Self::Etag),
            "ObjectParts" => Ok(Self::ObjectParts),
            "ObjectSize" => Ok(Self::ObjectSize),
            "StorageClass" => Ok(Self::StorageClass),
            _ => Err(ParseEnumError::new("ObjectAttributes", s)),
        }
    }
}

/// S3 ObjectCannedACL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectCannedACL {
    /// Default variant.
    #[default]
    #[serde(rename = "authenticated-read")]
    AuthenticatedRead,
    #[serde(rename = "aws-exec-read")]
    AwsExecRead,
    #[serde(rename = "bucket-owner-full-control")]
    BucketOwnerFullControl,
    #[serde(rename = "bucket-owner-read")]
    BucketOwnerRead,
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "public-read")]
    PublicRead,
    #[serde(rename = "public-read-write")]
    PublicReadWrite,
}

impl ObjectCannedACL {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticatedRead => "authenticated-read",
            Self::AwsExecRead => "aws-exec-read",
            Self::BucketOwnerFullControl => "bucket-owner-full-control",
            Self::BucketOwnerRead => "bucket-owner-read",
            Self::Private => "private",
            Self::PublicRead => "public-read",
            Self::PublicReadWrite => "public-read-write",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[
            Self::AuthenticatedRead,
            Self::AwsExecRead,
            Self::BucketOwnerFullControl,
            Self::BucketOwnerRead,
            Self::Private,
            Self::PublicRead,
            Self::PublicReadWrite,
        ]
    }
}

impl fmt::Display for ObjectCannedACL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectCannedACL {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authenticated-read" => Ok(Self::AuthenticatedRead),
            "aws-exec-read" => Ok(Self::AwsExecRead),
            "bucket-owner-full-control" => Ok(Self::BucketOwnerFullControl),
            "bucket-owner-read" => Ok(Self::BucketOwnerRead),
            "private" => Ok(Self::Private),
            "public-read" => Ok(Self::PublicRead),
            "public-read-write" => Ok(Self::PublicReadWrite),
            _ => Err(ParseEnumError::new("ObjectCannedACL", s)),
        }
    }
}

/// S3 ObjectLockEnabled enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectLockEnabled {
    /// Default variant.
    #[default]
    Enabled,
}

impl ObjectLockEnabled {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Enabled]
    }
}

impl fmt::Display for ObjectLockEnabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectLockEnabled {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("ObjectLockEnabled", s)),
        }
    }
}

/// S3 ObjectLockLegalHoldStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectLockLegalHoldStatus {
    /// Default variant.
    #[default]
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "ON")]
    On,
}

impl ObjectLockLegalHoldStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Off, Self::On]
    }
}

impl fmt::Display for ObjectLockLegalHoldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectLockLegalHoldStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFF" => Ok(Self::Off),
            "ON" => Ok(Self::On),
            _ => Err(ParseEnumError::new("ObjectLockLegalHoldStatus", s)),
        }
    }
}

/// S3 ObjectLockMode enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectLockMode {
    /// Default variant.
    #[default]
    #[serde(rename = "COMPLIANCE")]
    Compliance,
    #[serde(rename = "GOVERNANCE")]
    Governance,
}

impl ObjectLockMode {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compliance => "COMPLIANCE",
            Self::Governance => "GOVERNANCE",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Compliance, Self::Governance]
    }
}

impl fmt::Display for ObjectLockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectLockMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPLIANCE" => Ok(Self::Compliance),
            "GOVERNANCE" => Ok(Self::Governance),
            _ => Err(ParseEnumError::new("ObjectLockMode", s)),
        }
    }
}

/// S3 ObjectLockRetentionMode enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectLockRetentionMode {
    /// Default variant.
    #[default]
    #[serde(rename = "COMPLIANCE")]
    Compliance,
    #[serde(rename = "GOVERNANCE")]
    Governance,
}

impl ObjectLockRetentionMode {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compliance => "COMPLIANCE",
            Self::Governance => "GOVERNANCE",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Compliance, Self::Governance]
    }
}

impl fmt::Display for ObjectLockRetentionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectLockRetentionMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPLIANCE" => Ok(Self::Compliance),
            "GOVERNANCE" => Ok(Self::Governance),
            _ => Err(ParseEnumError::new("ObjectLockRetentionMode", s)),
        }
    }
}

/// S3 ObjectOwnership enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectOwnership {
    /// Default variant.
    #[default]
    BucketOwnerEnforced,
    BucketOwnerPreferred,
    ObjectWriter,
}

impl ObjectOwnership {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BucketOwnerEnforced => "BucketOwnerEnforced",
            Self::BucketOwnerPreferred => "BucketOwnerPreferred",
            Self::ObjectWriter => "ObjectWriter",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::BucketOwnerEnforced, Self::BucketOwnerPreferred, Self::ObjectWriter]
    }
}

impl fmt::Display for ObjectOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectOwnership {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BucketOwnerEnforced" => Ok(Self::BucketOwnerEnforced),
            "BucketOwnerPreferred" => Ok(Self::BucketOwnerPreferred),
            "ObjectWriter" => Ok(Self::ObjectWriter),
            _ => Err(ParseEnumError::new("ObjectOwnership", s)),
        }
    }
}

/// S3 ObjectStorageClass enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectStorageClass {
    /// Default variant.
    #[default]
    #[serde(rename = "DEEP_ARCHIVE")]
    DeepArchive,
    #[serde(rename = "EXPRESS_ONEZONE")]
    ExpressOnezone,
    #[serde(rename = "FSX_ONTAP")]
    FsxOntap,
    #[serde(rename = "FSX_OPENZFS")]
    FsxOpenzfs,
    #[serde(rename = "GLACIER")]
    Glacier,
    #[serde(rename = "GLACIER_IR")]
    GlacierIr,
    #[serde(rename = "INTELLIGENT_TIERING")]
    IntelligentTiering,
    #[serde(rename = "ONEZONE_IA")]
    OnezoneIa,
    #[serde(rename = "OUTPOSTS")]
    Outposts,
    #[serde(rename = "REDUCED_REDUNDANCY")]
    ReducedRedundancy,
    #[serde(rename = "SNOW")]
    Snow,
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "STANDARD_IA")]
    StandardIa,
}

impl ObjectStorageClass {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeepArchive => "DEEP_ARCHIVE",
            Self::ExpressOnezone => "EXPRESS_ONEZONE",
            Self::FsxOntap => "FSX_ONTAP",
            Self::FsxOpenzfs => "FSX_OPENZFS",
            Self::Glacier => "GLACIER",
            Self::GlacierIr => "GLACIER_IR",
            Self::IntelligentTiering => "INTELLIGENT_TIERING",
            Self::OnezoneIa => "ONEZONE_IA",
            Self::Outposts => "OUTPOSTS",
            Self::ReducedRedundancy => "REDUCED_REDUNDANCY",
            Self::Snow => "SNOW",
            Self::Standard => "STANDARD",
            Self::StandardIa => "STANDARD_IA",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[
            Self::DeepArchive,
            Self::ExpressOnezone,
            Self::FsxOntap,
            Self::FsxOpenzfs,
            Self::Glacier,
            Self::GlacierIr,
            Self::IntelligentTiering,
            Self::OnezoneIa,
            Self::Outposts,
            Self::ReducedRedundancy,
            Self::Snow,
            Self::Standard,
            Self::StandardIa,
        ]
    }
}

impl fmt::Display for ObjectStorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectStorageClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEEP_ARCHIVE" => Ok(Self::DeepArchive),
            "EXPRESS_ONEZONE" => Ok(Self::ExpressOnezone),
            "FSX_ONTAP" => Ok(Self::FsxOntap),
            "FSX_OPENZFS" => Ok(Self::FsxOpenzfs),
            "GLACIER" => Ok(Self::Glacier),
            "GLACIER_IR" => Ok(Self::GlacierIr),
            "INTELLIGENT_TIERING" => Ok(Self::IntelligentTiering),
            "ONEZONE_IA" => Ok(Self::OnezoneIa),
            "OUTPOSTS" => Ok(Self::Outposts),
            "REDUCED_REDUNDANCY" => Ok(Self::ReducedRedundancy),
            "SNOW" => Ok(Self::Snow),
            "STANDARD" => Ok(Self::Standard),
            "STANDARD_IA" => Ok(Self::StandardIa),
            _ => Err(ParseEnumError::new("ObjectStorageClass", s)),
        }
    }
}

/// S3 ObjectVersionStorageClass enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectVersionStorageClass {
    /// Default variant.
    #[default]
    #[serde(rename = "STANDARD")]
    Standard,
}

impl ObjectVersionStorageClass {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Standard]
    }
}

impl fmt::Display for ObjectVersionStorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectVersionStorageClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Self::Standard),
            _ => Err(ParseEnumError::new("ObjectVersionStorageClass", s)),
        }
    }
}

/// S3 OptionalObjectAttributes enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OptionalObjectAttributes {
    /// Default variant.
    #[default]
    RestoreStatus,
}

impl OptionalObjectAttributes {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RestoreStatus => "RestoreStatus",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::RestoreStatus]
    }
}

impl fmt::Display for OptionalObjectAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionalObjectAttributes {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RestoreStatus" => Ok(Self::RestoreStatus),
            _ => Err(ParseEnumError::new("OptionalObjectAttributes", s)),
        }
    }
}

/// S3 OwnerOverride enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OwnerOverride {
    /// Default variant.
    #[default]
    Destination,
}

impl OwnerOverride {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Destination => "Destination",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Destination]
    }
}

impl fmt::Display for OwnerOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnerOverride {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Destination" => Ok(Self::Destination),
            _ => Err(ParseEnumError::new("OwnerOverride", s)),
        }
    }
}

/// S3 PartitionDateSource enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PartitionDateSource {
    /// Default variant.
    #[default]
    DeliveryTime,
    EventTime,
}

impl PartitionDateSource {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeliveryTime => "DeliveryTime",
            Self::EventTime => "EventTime",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::DeliveryTime, Self::EventTime]
    }
}

impl fmt::Display for PartitionDateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionDateSource {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DeliveryTime" => Ok(Self::DeliveryTime),
            "EventTime" => Ok(Self::EventTime),
            _ => Err(ParseEnumError::new("PartitionDateSource", s)),
        }
    }
}

/// S3 Payer enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Payer {
    /// Default variant.
    #[default]
    BucketOwner,
    Requester,
}

impl Payer {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BucketOwner => "BucketOwner",
            Self::Requester => "Requester",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::BucketOwner, Self::Requester]
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Payer {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BucketOwner" => Ok(Self::BucketOwner),
            "Requester" => Ok(Self::Requester),
            _ => Err(ParseEnumError::new("Payer", s)),
        }
    }
}

/// S3 Permission enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Permission {
    /// Default variant.
    #[default]
    #[serde(rename = "FULL_CONTROL")]
    FullControl,
    #[serde(rename = "READ")]
    Read,
    #[serde(rename = "READ_ACP")]
    ReadAcp,
    #[serde(rename = "WRITE")]
    Write,
    #[serde(rename = "WRITE_ACP")]
    WriteAcp,
}

impl Permission {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullControl => "FULL_CONTROL",
            Self::Read => "READ",
            Self::ReadAcp => "READ_ACP",
            Self::Write => "WRITE",
            Self::WriteAcp => "WRITE_ACP",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::FullControl, Self::Read, Self::ReadAcp, Self::Write, Self::WriteAcp]
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FULL_CONTROL" => Ok(Self::FullControl),
            "READ" => Ok(Self::Read),
            "READ_ACP" => Ok(Self::ReadAcp),
            "WRITE" => Ok(Self::Write),
            "WRITE_ACP" => Ok(Self::WriteAcp),
            _ => Err(ParseEnumError::new("Permission", s)),
        }
    }
}

/// S3 Protocol enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Protocol {
    /// Default variant.
    #[default]
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "https")]
    Https,
}

impl Protocol {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Http, Self::Https]
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(ParseEnumError::new("Protocol", s)),
        }
    }
}

/// S3 QuoteFields enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuoteFields {
    /// Default variant.
    #[default]
    #[serde(rename = "ALWAYS")]
    Always,
    #[serde(rename = "ASNEEDED")]
    Asneeded,
}

impl QuoteFields {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "ALWAYS",
            Self::Asneeded => "ASNEEDED",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Always, Self::Asneeded]
    }
}

impl fmt::Display for QuoteFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteFields {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALWAYS" => Ok(Self::Always),
            "ASNEEDED" => Ok(Self::Asneeded),
            _ => Err(ParseEnumError::new("QuoteFields", s)),
        }
    }
}

/// S3 ReplicaModificationsStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplicaModificationsStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl ReplicaModificationsStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for ReplicaModificationsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplicaModificationsStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("ReplicaModificationsStatus", s)),
        }
    }
}

/// S3 ReplicationRuleStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplicationRuleStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl ReplicationRuleStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for ReplicationRuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplicationRuleStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("ReplicationRuleStatus", s)),
        }
    }
}

/// S3 ReplicationStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplicationStatus {
    /// Default variant.
    #[default]
    #[serde(rename = "COMPLETE")]
    Complete,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "REPLICA")]
    Replica,
}

impl ReplicationStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "COMPLETE",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
            Self::Replica => "REPLICA",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Complete, Self::Completed, Self::Failed, Self::Pending, Self::Replica]
    }
}

impl fmt::Display for ReplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplicationStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPLETE" => Ok(Self::Complete),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            "PENDING" => Ok(Self::Pending),
            "REPLICA" => Ok(Self::Replica),
            _ => Err(ParseEnumError::new("ReplicationStatus", s)),
        }
    }
}

/// S3 ReplicationTimeStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplicationTimeStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl ReplicationTimeStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for ReplicationTimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplicationTimeStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("ReplicationTimeStatus", s)),
        }
    }
}

/// S3 RequestCharged enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestCharged {
    /// Default variant.
    #[default]
    #[serde(rename = "requester")]
    Requester,
}

impl RequestCharged {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Requester => "requester",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Requester]
    }
}

impl fmt::Display for RequestCharged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestCharged {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requester" => Ok(Self::Requester),
            _ => Err(ParseEnumError::new("RequestCharged", s)),
        }
    }
}

/// S3 RequestPayer enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestPayer {
    /// Default variant.
    #[default]
    #[serde(rename = "requester")]
    Requester,
}

impl RequestPayer {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Requester => "requester",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Requester]
    }
}

impl fmt::Display for RequestPayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestPayer {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requester" => Ok(Self::Requester),
            _ => Err(ParseEnumError::new("RequestPayer", s)),
        }
    }
}

/// S3 RestoreRequestType enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RestoreRequestType {
    /// Default variant.
    #[default]
    #[serde(rename = "SELECT")]
    Select,
}

impl RestoreRequestType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Select]
    }
}

impl fmt::Display for RestoreRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestoreRequestType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SELECT" => Ok(Self::Select),
            _ => Err(ParseEnumError::new("RestoreRequestType", s)),
        }
    }
}

/// S3 ServerSideEncryption enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServerSideEncryption {
    /// Default variant.
    #[default]
    #[serde(rename = "AES256")]
    Aes256,
    #[serde(rename = "aws:fsx")]
    AwsFsx,
    #[serde(rename = "aws:kms")]
    AwsKms,
    #[serde(rename = "aws:kms:dsse")]
    AwsKmsDsse,
}

impl ServerSideEncryption {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aes256 => "AES256",
            Self::AwsFsx => "aws:fsx",
            Self::AwsKms => "aws:kms",
            Self::AwsKmsDsse => "aws:kms:dsse",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Aes256, Self::AwsFsx, Self::AwsKms, Self::AwsKmsDsse]
    }
}

impl fmt::Display for ServerSideEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerSideEncryption {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AES256" => Ok(Self::Aes256),
            "aws:fsx" => Ok(Self::AwsFsx),
            "aws:kms" => Ok(Self::AwsKms),
            "aws:kms:dsse" => Ok(Self::AwsKmsDsse),
            _ => Err(ParseEnumError::new("ServerSideEncryption", s)),
        }
    }
}

/// S3 SseKmsEncryptedObjectsStatus enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SseKmsEncryptedObjectsStatus {
    /// Default variant.
    #[default]
    Disabled,
    Enabled,
}

impl SseKmsEncryptedObjectsStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Enabled => "Enabled",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Disabled, Self::Enabled]
    }
}

impl fmt::Display for SseKmsEncryptedObjectsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SseKmsEncryptedObjectsStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Disabled" => Ok(Self::Disabled),
            "Enabled" => Ok(Self::Enabled),
            _ => Err(ParseEnumError::new("SseKmsEncryptedObjectsStatus", s)),
        }
    }
}

/// S3 StorageClass enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageClass {
    /// Default variant.
    #[default]
    #[serde(rename = "DEEP_ARCHIVE")]
    DeepArchive,
    #[serde(rename = "EXPRESS_ONEZONE")]
    ExpressOnezone,
    #[serde(rename = "FSX_ONTAP")]
    FsxOntap,
    #[serde(rename = "FSX_OPENZFS")]
    FsxOpenzfs,
    #[serde(rename = "GLACIER")]
    Glacier,
    #[serde(rename = "GLACIER_IR")]
    GlacierIr,
    #[serde(rename = "INTELLIGENT_TIERING")]
    IntelligentTiering,
    #[serde(rename = "ONEZONE_IA")]
    OnezoneIa,
    #[serde(rename = "OUTPOSTS")]
    Outposts,
    #[serde(rename = "REDUCED_REDUNDANCY")]
    ReducedRedundancy,
    #[serde(rename = "SNOW")]
    Snow,
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "STANDARD_IA")]
    StandardIa,
}

impl StorageClass {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeepArchive => "DEEP_ARCHIVE",
            Self::ExpressOnezone => "EXPRESS_ONEZONE",
            Self::FsxOntap => "FSX_ONTAP",
            Self::FsxOpenzfs => "FSX_OPENZFS",
            Self::Glacier => "GLACIER",
            Self::GlacierIr => "GLACIER_IR",
            Self::IntelligentTiering => "INTELLIGENT_TIERING",
            Self::OnezoneIa => "ONEZONE_IA",
            Self::Outposts => "OUTPOSTS",
            Self::ReducedRedundancy => "REDUCED_REDUNDANCY",
            Self::Snow => "SNOW",
            Self::Standard => "STANDARD",
            Self::StandardIa => "STANDARD_IA",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[
            Self::DeepArchive,
            Self::ExpressOnezone,
            Self::FsxOntap,
            Self::FsxOpenzfs,
            Self::Glacier,
            Self::GlacierIr,
            Self::IntelligentTiering,
            Self::OnezoneIa,
            Self::Outposts,
            Self::ReducedRedundancy,
            Self::Snow,
            Self::Standard,
            Self::StandardIa,
        ]
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEEP_ARCHIVE" => Ok(Self::DeepArchive),
            "EXPRESS_ONEZONE" => Ok(Self::ExpressOnezone),
            "FSX_ONTAP" => Ok(Self::FsxOntap),
            "FSX_OPENZFS" => Ok(Self::FsxOpenzfs),
            "GLACIER" => Ok(Self::Glacier),
            "GLACIER_IR" => Ok(Self::GlacierIr),
            "INTELLIGENT_TIERING" => Ok(Self::IntelligentTiering),
            "ONEZONE_IA" => Ok(Self::OnezoneIa),
            "OUTPOSTS" => Ok(Self::Outposts),
            "REDUCED_REDUNDANCY" => Ok(Self::ReducedRedundancy),
            "SNOW" => Ok(Self::Snow),
            "STANDARD" => Ok(Self::Standard),
            "STANDARD_IA" => Ok(Self::StandardIa),
            _ => Err(ParseEnumError::new("StorageClass", s)),
        }
    }
}

/// S3 StorageClassAnalysisSchemaVersion enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StorageClassAnalysisSchemaVersion {
    /// Default variant.
    #[default]
    #[serde(rename = "V_1")]
    V1,
}

impl StorageClassAnalysisSchemaVersion {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "V_1",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::V1]
    }
}

impl fmt::Display for StorageClassAnalysisSchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageClassAnalysisSchemaVersion {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "V_1" => Ok(Self::V1),
            _ => Err(ParseEnumError::new("StorageClassAnalysisSchemaVersion", s)),
        }
    }
}

/// S3 TaggingDirective enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaggingDirective {
    /// Default variant.
    #[default]
    #[serde(rename = "COPY")]
    Copy,
    #[serde(rename = "REPLACE")]
    Replace,
}

impl TaggingDirective {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "COPY",
            Self::Replace => "REPLACE",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Copy, Self::Replace]
    }
}

impl fmt::Display for TaggingDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaggingDirective {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COPY" => Ok(Self::Copy),
            "REPLACE" => Ok(Self::Replace),
            _ => Err(ParseEnumError::new("TaggingDirective", s)),
        }
    }
}

/// S3 Tier enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    /// Default variant.
    #[default]
    Bulk,
    Expedited,
    Standard,
}

impl Tier {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bulk => "Bulk",
            Self::Expedited => "Expedited",
            Self::Standard => "Standard",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::Bulk, Self::Expedited, Self::Standard]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bulk" => Ok(Self::Bulk),
            "Expedited" => Ok(Self::Expedited),
            "Standard" => Ok(Self::Standard),
            _ => Err(ParseEnumError::new("Tier", s)),
        }
    }
}

/// S3 TransitionDefaultMinimumObjectSize enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransitionDefaultMinimumObjectSize {
    /// Default variant.
    #[default]
    #[serde(rename = "all_storage_classes_128K")]
    AllStorageClasses128k,
    #[serde(rename = "varies_by_storage_class")]
    VariesByStorageClass,
}

impl TransitionDefaultMinimumObjectSize {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AllStorageClasses128k => "all_storage_classes_128K",
            Self::VariesByStorageClass => "varies_by_storage_class",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::AllStorageClasses128k, Self::VariesByStorageClass]
    }
}

impl fmt::Display for TransitionDefaultMinimumObjectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionDefaultMinimumObjectSize {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all_storage_classes_128K" => Ok(Self::AllStorageClasses128k),
            "varies_by_storage_class" => Ok(Self::VariesByStorageClass),
            _ => Err(ParseEnumError::new("TransitionDefaultMinimumObjectSize", s)),
        }
    }
}

/// S3 TransitionStorageClass enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransitionStorageClass {
    /// Default variant.
    #[default]
    #[serde(rename = "DEEP_ARCHIVE")]
    DeepArchive,
    #[serde(rename = "GLACIER")]
    Glacier,
    #[serde(rename = "GLACIER_IR")]
    GlacierIr,
    #[serde(rename = "INTELLIGENT_TIERING")]
    IntelligentTiering,
    #[serde(rename = "ONEZONE_IA")]
    OnezoneIa,
    #[serde(rename = "STANDARD_IA")]
    StandardIa,
}

impl TransitionStorageClass {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeepArchive => "DEEP_ARCHIVE",
            Self::Glacier => "GLACIER",
            Self::GlacierIr => "GLACIER_IR",
            Self::IntelligentTiering => "INTELLIGENT_TIERING",
            Self::OnezoneIa => "ONEZONE_IA",
            Self::StandardIa => "STANDARD_IA",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[
            Self::DeepArchive,
            Self::Glacier,
            Self::GlacierIr,
            Self::IntelligentTiering,
            Self::OnezoneIa,
            Self::StandardIa,
        ]
    }
}

impl fmt::Display for TransitionStorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionStorageClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEEP_ARCHIVE" => Ok(Self::DeepArchive),
            "GLACIER" => Ok(Self::Glacier),
            "GLACIER_IR" => Ok(Self::GlacierIr),
            "INTELLIGENT_TIERING" => Ok(Self::IntelligentTiering),
            "ONEZONE_IA" => Ok(Self::OnezoneIa),
            "STANDARD_IA" => Ok(Self::StandardIa),
            _ => Err(ParseEnumError::new("TransitionStorageClass", s)),
        }
    }
}

/// S3 Type enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Type {
    /// Default variant.
    #[default]
    AmazonCustomerByEmail,
    CanonicalUser,
    Group,
}

impl Type {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AmazonCustomerByEmail => "AmazonCustomerByEmail",
            Self::CanonicalUser => "CanonicalUser",
            Self::Group => "Group",
        }
    }

    /// Returns every variant in declaration order.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &[Self::AmazonCustomerByEmail, Self::CanonicalUser, Self::Group]
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Type {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AmazonCustomerByEmail" => Ok(Self::AmazonCustomerByEmail),
            "CanonicalUser" => Ok(Self::CanonicalUser),
            "Group" => Ok(Self::Group),
            _ => Err(ParseEnumError::new("Type", s)),
        }
    }
}

/// S3 AbortIncompleteMultipartUpload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbortIncompleteMultipartUpload {
    pub days_after_initiation: Option<i32>,
}

impl AbortIncompleteMultipartUpload {
    #[must_use]
    pub fn days_after_initiation(&self) -> Option<i32> {
        self.days_after_initiation
    }

    #[must_use]
    pub fn with_days_after_initiation(mut self, days_after_initiation: i32) -> Self {
        self.days_after_initiation = Some(days_after_initiation);
        self
    }
}

/// S3 AccelerateConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccelerateConfiguration {
    pub status: Option<BucketAccelerateStatus>,
}

impl AccelerateConfiguration {
    #[must_use]
    pub fn status(&self) -> Option<BucketAccelerateStatus> {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: BucketAccelerateStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// S3 AccessControlPolicy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessControlPolicy {
    pub grants: Vec<Grant>,
    pub owner: Option<Owner>,
}

impl AccessControlPolicy {
    #[must_use]
    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }

    #[must_use]
    pub fn with_grants(mut self, grants: impl IntoIterator<Item = Grant>) -> Self {
        self.grants = grants.into_iter().collect();
        self
    }

    #[must_use]
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// S3 AccessControlTranslation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessControlTranslation {
    pub owner: OwnerOverride,
}

impl AccessControlTranslation {
    /// Creates a `AccessControlTranslation` from its required members.
    #[must_use]
    pub fn new(owner: OwnerOverride) -> Self {
        Self {
            owner,
        }
    }

    #[must_use]
    pub fn owner(&self) -> OwnerOverride {
        self.owner
    }

    #[must_use]
    pub fn with_owner(mut self, owner: OwnerOverride) -> Self {
        self.owner = owner;
        self
    }
}

/// S3 AnalyticsAndOperator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsAndOperator {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
}

impl AnalyticsAndOperator {
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// S3 AnalyticsConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsConfiguration {
    pub filter: Option<AnalyticsFilter>,
    pub id: String,
    pub storage_class_analysis: StorageClassAnalysis,
}

impl AnalyticsConfiguration {
    /// Creates a `AnalyticsConfiguration` from its required members.
    #[must_use]
    pub fn new(id: impl Into<String>, storage_class_analysis: StorageClassAnalysis) -> Self {
        Self {
            id: id.into(),
            storage_class_analysis,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn filter(&self) -> Option<&AnalyticsFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: AnalyticsFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn storage_class_analysis(&self) -> &StorageClassAnalysis {
        &self.storage_class_analysis
    }

    #[must_use]
    pub fn with_storage_class_analysis(
        mut self,
        storage_class_analysis: StorageClassAnalysis,
    ) -> Self {
        self.storage_class_analysis = storage_class_analysis;
        self
    }
}

/// S3 AnalyticsExportDestination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsExportDestination {
    pub s3_bucket_destination: AnalyticsS3BucketDestination,
}

impl AnalyticsExportDestination {
    /// Creates a `AnalyticsExportDestination` from its required members.
    #[must_use]
    pub fn new(s3_bucket_destination: AnalyticsS3BucketDestination) -> Self {
        Self {
            s3_bucket_destination,
        }
    }

    #[must_use]
    pub fn s3_bucket_destination(&self) -> &AnalyticsS3BucketDestination {
        &self.s3_bucket_destination
    }

    #[must_use]
    pub fn with_s3_bucket_destination(
        mut self,
        s3_bucket_destination: AnalyticsS3BucketDestination,
    ) -> Self {
        self.s3_bucket_destination = s3_bucket_destination;
        self
    }
}

/// S3 AnalyticsFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsFilter {
    pub and: Option<AnalyticsAndOperator>,
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
}

impl AnalyticsFilter {
    #[must_use]
    pub fn and(&self) -> Option<&AnalyticsAndOperator> {
        self.and.as_ref()
    }

    #[must_use]
    pub fn with_and(mut self, and: AnalyticsAndOperator) -> Self {
        self.and = Some(and);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// S3 AnalyticsS3BucketDestination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsS3BucketDestination {
    pub bucket: String,
    pub bucket_account_id: Option<String>,
    pub format: AnalyticsS3ExportFileFormat,
    pub prefix: Option<String>,
}

impl AnalyticsS3BucketDestination {
    /// Creates a `AnalyticsS3BucketDestination` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, format: AnalyticsS3ExportFileFormat) -> Self {
        Self {
            bucket: bucket.into(),
            format,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn bucket_account_id(&self) -> Option<&str> {
        self.bucket_account_id.as_deref()
    }

    #[must_use]
    pub fn with_bucket_account_id(mut self, bucket_account_id: impl Into<String>) -> Self {
        self.bucket_account_id = Some(bucket_account_id.into());
        self
    }

    #[must_use]
    pub fn format(&self) -> AnalyticsS3ExportFileFormat {
        self.format
    }

    #[must_use]
    pub fn with_format(mut self, format: AnalyticsS3ExportFileFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// S3 BlockedEncryptionTypes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedEncryptionTypes {
    pub encryption_type: Vec<EncryptionType>,
}

impl BlockedEncryptionTypes {
    #[must_use]
    pub fn encryption_type(&self) -> &[EncryptionType] {
        &self.encryption_type
    }

    #[must_use]
    pub fn with_encryption_type(
        mut self,
        encryption_type: impl IntoIterator<Item = EncryptionType>,
    ) -> Self {
        self.encryption_type = encryption_type.into_iter().collect();
        self
    }
}

/// S3 Bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    pub bucket_arn: Option<String>,
    pub bucket_region: Option<String>,
    pub creation_date: Option<chrono::DateTime<chrono::Utc>>,
    pub name: Option<String>,
}

impl Bucket {
    #[must_use]
    pub fn bucket_arn(&self) -> Option<&str> {
        self.bucket_arn.as_deref()
    }

    #[must_use]
    pub fn with_bucket_arn(mut self, bucket_arn: impl Into<String>) -> Self {
        self.bucket_arn = Some(bucket_arn.into());
        self
    }

    #[must_use]
    pub fn bucket_region(&self) -> Option<&str> {
        self.bucket_region.as_deref()
    }

    #[must_use]
    pub fn with_bucket_region(mut self, bucket_region: impl Into<String>) -> Self {
        self.bucket_region = Some(bucket_region.into());
        self
    }

    #[must_use]
    pub fn creation_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.creation_date
    }

    #[must_use]
    pub fn with_creation_date(mut self, creation_date: chrono::DateTime<chrono::Utc>) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// S3 BucketInfo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketInfo {
    pub data_redundancy: Option<DataRedundancy>,
    pub r#type: Option<BucketType>,
}

impl BucketInfo {
    #[must_use]
    pub fn data_redundancy(&self) -> Option<DataRedundancy> {
        self.data_redundancy
    }

    #[must_use]
    pub fn with_data_redundancy(mut self, data_redundancy: DataRedundancy) -> Self {
        self.data_redundancy = Some(data_redundancy);
        self
    }

    #[must_use]
    pub fn r#type(&self) -> Option<BucketType> {
        self.r#type
    }

    #[must_use]
    pub fn with_type(mut self, r#type: BucketType) -> Self {
        self.r#type = Some(r#type);
        self
    }
}

/// S3 BucketLifecycleConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketLifecycleConfiguration {
    pub rules: Vec<LifecycleRule>,
}

impl BucketLifecycleConfiguration {
    #[must_use]
    pub fn rules(&self) -> &[LifecycleRule] {
        &self.rules
    }

    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = LifecycleRule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }
}

/// S3 BucketLoggingStatus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketLoggingStatus {
    pub logging_enabled: Option<LoggingEnabled>,
}

impl BucketLoggingStatus {
    #[must_use]
    pub fn logging_enabled(&self) -> Option<&LoggingEnabled> {
        self.logging_enabled.as_ref()
    }

    #[must_use]
    pub fn with_logging_enabled(mut self, logging_enabled: LoggingEnabled) -> Self {
        self.logging_enabled = Some(logging_enabled);
        self
    }
}

/// S3 CORSConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CORSConfiguration {
    pub cors_rules: Vec<CORSRule>,
}

impl CORSConfiguration {
    #[must_use]
    pub fn cors_rules(&self) -> &[CORSRule] {
        &self.cors_rules
    }

    #[must_use]
    pub fn with_cors_rules(mut self, cors_rules: impl IntoIterator<Item = CORSRule>) -> Self {
        self.cors_rules = cors_rules.into_iter().collect();
        self
    }
}

/// S3 CORSRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CORSRule {
    pub allowed_headers: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_origins: Vec<String>,
    pub expose_headers: Vec<String>,
    pub id: Option<String>,
    pub max_age_seconds: Option<i32>,
}

impl CORSRule {
    #[must_use]
    pub fn allowed_headers(&self) -> &[String] {
        &self.allowed_headers
    }

    #[must_use]
    pub fn with_allowed_headers(
        mut self,
        allowed_headers: impl IntoIterator<Item = String>,
    ) -> Self {
        self.allowed_headers = allowed_headers.into_iter().collect();
        self
    }

    #[must_use]
    pub fn allowed_methods(&self) -> &[String] {
        &self.allowed_methods
    }

    #[must_use]
    pub fn with_allowed_methods(
        mut self,
        allowed_methods: impl IntoIterator<Item = String>,
    ) -> Self {
        self.allowed_methods = allowed_methods.into_iter().collect();
        self
    }

    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    #[must_use]
    pub fn with_allowed_origins(
        mut self,
        allowed_origins: impl IntoIterator<Item = String>,
    ) -> Self {
        self.allowed_origins = allowed_origins.into_iter().collect();
        self
    }

    #[must_use]
    pub fn expose_headers(&self) -> &[String] {
        &self.expose_headers
    }

    #[must_use]
    pub fn with_expose_headers(mut self, expose_headers: impl IntoIterator<Item = String>) -> Self {
        self.expose_headers = expose_headers.into_iter().collect();
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn max_age_seconds(&self) -> Option<i32> {
        self.max_age_seconds
    }

    #[must_use]
    pub fn with_max_age_seconds(mut self, max_age_seconds: i32) -> Self {
        self.max_age_seconds = Some(max_age_seconds);
        self
    }
}

/// S3 CSVInput.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CSVInput {
    pub allow_quoted_record_delimiter: Option<bool>,
    pub comments: Option<String>,
    pub field_delimiter: Option<String>,
    pub file_header_info: Option<FileHeaderInfo>,
    pub quote_character: Option<String>,
    pub quote_escape_character: Option<String>,
    pub record_delimiter: Option<String>,
}

impl CSVInput {
    #[must_use]
    pub fn allow_quoted_record_delimiter(&self) -> Option<bool> {
        self.allow_quoted_record_delimiter
    }

    #[must_use]
    pub fn with_allow_quoted_record_delimiter(
        mut self,
        allow_quoted_record_delimiter: bool,
    ) -> Self {
        self.allow_quoted_record_delimiter = Some(allow_quoted_record_delimiter);
        self
    }

    #[must_use]
    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    #[must_use]
    pub fn field_delimiter(&self) -> Option<&str> {
        self.field_delimiter.as_deref()
    }

    #[must_use]
    pub fn with_field_delimiter(mut self, field_delimiter: impl Into<String>) -> Self {
        self.field_delimiter = Some(field_delimiter.into());
        self
    }

    #[must_use]
    pub fn file_header_info(&self) -> Option<FileHeaderInfo> {
        self.file_header_info
    }

    #[must_use]
    pub fn with_file_header_info(mut self, file_header_info: FileHeaderInfo) -> Self {
        self.file_header_info = Some(file_header_info);
        self
    }

    #[must_use]
    pub fn quote_character(&self) -> Option<&str> {
        self.quote_character.as_deref()
    }

    #[must_use]
    pub fn with_quote_character(mut self, quote_character: impl Into<String>) -> Self {
        self.quote_character = Some(quote_character.into());
        self
    }

    #[must_use]
    pub fn quote_escape_character(&self) -> Option<&str> {
        self.quote_escape_character.as_deref()
    }

    #[must_use]
    pub fn with_quote_escape_character(
        mut self,
        quote_escape_character: impl Into<String>,
    ) -> Self {
        self.quote_escape_character = Some(quote_escape_character.into());
        self
    }

    #[must_use]
    pub fn record_delimiter(&self) -> Option<&str> {
        self.record_delimiter.as_deref()
    }

    #[must_use]
    pub fn with_record_delimiter(mut self, record_delimiter: impl Into<String>) -> Self {
        self.record_delimiter = Some(record_delimiter.into());
        self
    }
}

/// S3 CSVOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CSVOutput {
    pub field_delimiter: Option<String>,
    pub quote_character: Option<String>,
    pub quote_escape_character: Option<String>,
    pub quote_fields: Option<QuoteFields>,
    pub record_delimiter: Option<String>,
}

impl CSVOutput {
    #[must_use]
    pub fn field_delimiter(&self) -> Option<&str> {
        self.field_delimiter.as_deref()
    }

    #[must_use]
    pub fn with_field_delimiter(mut self, field_delimiter: impl Into<String>) -> Self {
        self.field_delimiter = Some(field_delimiter.into());
        self
    }

    #[must_use]
    pub fn quote_character(&self) -> Option<&str> {
        self.quote_character.as_deref()
    }

    #[must_use]
    pub fn with_quote_character(mut self, quote_character: impl Into<String>) -> Self {
        self.quote_character = Some(quote_character.into());
        self
    }

    #[must_use]
    pub fn quote_escape_character(&self) -> Option<&str> {
        self.quote_escape_character.as_deref()
    }

    #[must_use]
    pub fn with_quote_escape_character(
        mut self,
        quote_escape_character: impl Into<String>,
    ) -> Self {
        self.quote_escape_character = Some(quote_escape_character.into());
        self
    }

    #[must_use]
    pub fn quote_fields(&self) -> Option<QuoteFields> {
        self.quote_fields
    }

    #[must_use]
    pub fn with_quote_fields(mut self, quote_fields: QuoteFields) -> Self {
        self.quote_fields = Some(quote_fields);
        self
    }

    #[must_use]
    pub fn record_delimiter(&self) -> Option<&str> {
        self.record_delimiter.as_deref()
    }

    #[must_use]
    pub fn with_record_delimiter(mut self, record_delimiter: impl Into<String>) -> Self {
        self.record_delimiter = Some(record_delimiter.into());
        self
    }
}

/// S3 Checksum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checksum {
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_crc64nvme: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
    pub checksum_type: Option<ChecksumType>,
}

impl Checksum {
    #[must_use]
    pub fn checksum_crc32(&self) -> Option<&str> {
        self.checksum_crc32.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32(mut self, checksum_crc32: impl Into<String>) -> Self {
        self.checksum_crc32 = Some(checksum_crc32.into());
        self
    }

    #[must_use]
    pub fn checksum_crc32c(&self) -> Option<&str> {
        self.checksum_crc32c.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32c(mut self, checksum_crc32c: impl Into<String>) -> Self {
        self.checksum_crc32c = Some(checksum_crc32c.into());
        self
    }

    #[must_use]
    pub fn checksum_crc64nvme(&self) -> Option<&str> {
        self.checksum_crc64nvme.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc64nvme(mut self, checksum_crc64nvme: impl Into<String>) -> Self {
        self.checksum_crc64nvme = Some(checksum_crc64nvme.into());
        self
    }

    #[must_use]
    pub fn checksum_sha1(&self) -> Option<&str> {
        self.checksum_sha1.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha1(mut self, checksum_sha1: impl Into<String>) -> Self {
        self.checksum_sha1 = Some(checksum_sha1.into());
        self
    }

    #[must_use]
    pub fn checksum_sha256(&self) -> Option<&str> {
        self.checksum_sha256.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha256(mut self, checksum_sha256: impl Into<String>) -> Self {
        self.checksum_sha256 = Some(checksum_sha256.into());
        self
    }

    #[must_use]
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    #[must_use]
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = Some(checksum_type);
        self
    }
}

/// S3 CommonPrefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPrefix {
    pub prefix: Option<String>,
}

impl CommonPrefix {
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// S3 CompletedMultipartUpload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedMultipartUpload {
    pub parts: Vec<CompletedPart>,
}

impl CompletedMultipartUpload {
    #[must_use]
    pub fn parts(&self) -> &[CompletedPart] {
        &self.parts
    }

    #[must_use]
    pub fn with_parts(mut self, parts: impl IntoIterator<Item = CompletedPart>) -> Self {
        self.parts = parts.into_iter().collect();
        self
    }
}

/// S3 CompletedPart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedPart {
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_crc64nvme: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
    pub e_tag: Option<String>,
    pub part_number: Option<i32>,
}

impl CompletedPart {
    #[must_use]
    pub fn checksum_crc32(&self) -> Option<&str> {
        self.checksum_crc32.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32(mut self, checksum_crc32: impl Into<String>) -> Self {
        self.checksum_crc32 = Some(checksum_crc32.into());
        self
    }

    #[must_use]
    pub fn checksum_crc32c(&self) -> Option<&str> {
        self.checksum_crc32c.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32c(mut self, checksum_crc32c: impl Into<String>) -> Self {
        self.checksum_crc32c = Some(checksum_crc32c.into());
        self
    }

    #[must_use]
    pub fn checksum_crc64nvme(&self) -> Option<&str> {
        self.checksum_crc64nvme.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc64nvme(mut self, checksum_crc64nvme: impl Into<String>) -> Self {
        self.checksum_crc64nvme = Some(checksum_crc64nvme.into());
        self
    }

    #[must_use]
    pub fn checksum_sha1(&self) -> Option<&str> {
        self.checksum_sha1.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha1(mut self, checksum_sha1: impl Into<String>) -> Self {
        self.checksum_sha1 = Some(checksum_sha1.into());
        self
    }

    #[must_use]
    pub fn checksum_sha256(&self) -> Option<&str> {
        self.checksum_sha256.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha256(mut self, checksum_sha256: impl Into<String>) -> Self {
        self.checksum_sha256 = Some(checksum_sha256.into());
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn part_number(&self) -> Option<i32> {
        self.part_number
    }

    #[must_use]
    pub fn with_part_number(mut self, part_number: i32) -> Self {
        self.part_number = Some(part_number);
        self
    }
}

/// S3 Condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    pub http_error_code_returned_equals: Option<String>,
    pub key_prefix_equals: Option<String>,
}

impl Condition {
    #[must_use]
    pub fn http_error_code_returned_equals(&self) -> Option<&str> {
        self.http_error_code_returned_equals.as_deref()
    }

    #[must_use]
    pub fn with_http_error_code_returned_equals(
        mut self,
        http_error_code_returned_equals: impl Into<String>,
    ) -> Self {
        self.http_error_code_returned_equals = Some(http_error_code_returned_equals.into());
        self
    }

    #[must_use]
    pub fn key_prefix_equals(&self) -> Option<&str> {
        self.key_prefix_equals.as_deref()
    }

    #[must_use]
    pub fn with_key_prefix_equals(mut self, key_prefix_equals: impl Into<String>) -> Self {
        self.key_prefix_equals = Some(key_prefix_equals.into());
        self
    }
}

/// S3 CopyObjectResultDetails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyObjectResultDetails {
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_crc64nvme: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
    pub checksum_type: Option<ChecksumType>,
    pub e_tag: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

impl CopyObjectResultDetails {
    #[must_use]
    pub fn checksum_crc32(&self) -> Option<&str> {
        self.checksum_crc32.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32(mut self, checksum_crc32: impl Into<String>) -> Self {
        self.checksum_crc32 = Some(checksum_crc32.into());
        self
    }

    #[must_use]
    pub fn checksum_crc32c(&self) -> Option<&str> {
        self.checksum_crc32c.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32c(mut self, checksum_crc32c: impl Into<String>) -> Self {
        self.checksum_crc32c = Some(checksum_crc32c.into());
        self
    }

    #[must_use]
    pub fn checksum_crc64nvme(&self) -> Option<&str> {
        self.checksum_crc64nvme.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc64nvme(mut self, checksum_crc64nvme: impl Into<String>) -> Self {
        self.checksum_crc64nvme = Some(checksum_crc64nvme.into());
        self
    }

    #[must_use]
    pub fn checksum_sha1(&self) -> Option<&str> {
        self.checksum_sha1.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha1(mut self, checksum_sha1: impl Into<String>) -> Self {
        self.checksum_sha1 = Some(checksum_sha1.into());
        self
    }

    #[must_use]
    pub fn checksum_sha256(&self) -> Option<&str> {
        self.checksum_sha256.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha256(mut self, checksum_sha256: impl Into<String>) -> Self {
        self.checksum_sha256 = Some(checksum_sha256.into());
        self
    }

    #[must_use]
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    #[must_use]
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = Some(checksum_type);
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }
}

/// S3 CopyPartResultDetails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPartResultDetails {
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_crc64nvme: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
    pub e_tag: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

impl CopyPartResultDetails {
    #[must_use]
    pub fn checksum_crc32(&self) -> Option<&str> {
        self.checksum_crc32.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32(mut self, checksum_crc32: impl Into<String>) -> Self {
        self.checksum_crc32 = Some(checksum_crc32.into());
        self
    }

    #[must_use]
    pub fn checksum_crc32c(&self) -> Option<&str> {
        self.checksum_crc32c.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32c(mut self, checksum_crc32c: impl Into<String>) -> Self {
        self.checksum_crc32c = Some(checksum_crc32c.into());
        self
    }

    #[must_use]
    pub fn checksum_crc64nvme(&self) -> Option<&str> {
        self.checksum_crc64nvme.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc64nvme(mut self, checksum_crc64nvme: impl Into<String>) -> Self {
        self.checksum_crc64nvme = Some(checksum_crc64nvme.into());
        self
    }

    #[must_use]
    pub fn checksum_sha1(&self) -> Option<&str> {
        self.checksum_sha1.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha1(mut self, checksum_sha1: impl Into<String>) -> Self {
        self.checksum_sha1 = Some(checksum_sha1.into());
        self
    }

    #[must_use]
    pub fn checksum_sha256(&self) -> Option<&str> {
        self.checksum_sha256.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha256(mut self, checksum_sha256: impl Into<String>) -> Self {
        self.checksum_sha256 = Some(checksum_sha256.into());
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }
}

/// S3 CreateBucketConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBucketConfiguration {
    pub bucket: Option<BucketInfo>,
    pub location: Option<LocationInfo>,
    pub location_constraint: Option<BucketLocationConstraint>,
    pub tags: Vec<Tag>,
}

impl CreateBucketConfiguration {
    #[must_use]
    pub fn bucket(&self) -> Option<&BucketInfo> {
        self.bucket.as_ref()
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: BucketInfo) -> Self {
        self.bucket = Some(bucket);
        self
    }

    #[must_use]
    pub fn location(&self) -> Option<&LocationInfo> {
        self.location.as_ref()
    }

    #[must_use]
    pub fn with_location(mut self, location: LocationInfo) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn location_constraint(&self) -> Option<BucketLocationConstraint> {
        self.location_constraint
    }

    #[must_use]
    pub fn with_location_constraint(
        mut self,
        location_constraint: BucketLocationConstraint,
    ) -> Self {
        self.location_constraint = Some(location_constraint);
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// S3 DefaultRetention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultRetention {
    pub days: Option<i32>,
    pub mode: Option<ObjectLockRetentionMode>,
    pub years: Option<i32>,
}

impl DefaultRetention {
    #[must_use]
    pub fn days(&self) -> Option<i32> {
        self.days
    }

    #[must_use]
    pub fn with_days(mut self, days: i32) -> Self {
        self.days = Some(days);
        self
    }

    #[must_use]
    pub fn mode(&self) -> Option<ObjectLockRetentionMode> {
        self.mode
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ObjectLockRetentionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn years(&self) -> Option<i32> {
        self.years
    }

    #[must_use]
    pub fn with_years(mut self, years: i32) -> Self {
        self.years = Some(years);
        self
    }
}

/// S3 Delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delete {
    pub objects: Vec<ObjectIdentifier>,
    pub quiet: Option<bool>,
}

impl Delete {
    #[must_use]
    pub fn objects(&self) -> &[ObjectIdentifier] {
        &self.objects
    }

    #[must_use]
    pub fn with_objects(mut self, objects: impl IntoIterator<Item = ObjectIdentifier>) -> Self {
        self.objects = objects.into_iter().collect();
        self
    }

    #[must_use]
    pub fn quiet(&self) -> Option<bool> {
        self.quiet
    }

    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }
}

/// S3 DeleteError.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteError {
    pub code: Option<String>,
    pub key: Option<String>,
    pub message: Option<String>,
    pub version_id: Option<String>,
}

impl DeleteError {
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// S3 DeleteMarkerEntry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteMarkerEntry {
    pub is_latest: Option<bool>,
    pub key: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub owner: Option<Owner>,
    pub version_id: Option<String>,
}

impl DeleteMarkerEntry {
    #[must_use]
    pub fn is_latest(&self) -> Option<bool> {
        self.is_latest
    }

    #[must_use]
    pub fn with_is_latest(mut self, is_latest: bool) -> Self {
        self.is_latest = Some(is_latest);
        self
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    #[must_use]
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// S3 DeleteMarkerReplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteMarkerReplication {
    pub status: Option<DeleteMarkerReplicationStatus>,
}

impl DeleteMarkerReplication {
    #[must_use]
    pub fn status(&self) -> Option<DeleteMarkerReplicationStatus> {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: DeleteMarkerReplicationStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// S3 DeletedObject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletedObject {
    pub delete_marker: Option<bool>,
    pub delete_marker_version_id: Option<String>,
    pub key: Option<String>,
    pub version_id: Option<String>,
}

impl DeletedObject {
    #[must_use]
    pub fn delete_marker(&self) -> Option<bool> {
        self.delete_marker
    }

    #[must_use]
    pub fn with_delete_marker(mut self, delete_marker: bool) -> Self {
        self.delete_marker = Some(delete_marker);
        self
    }

    #[must_use]
    pub fn delete_marker_version_id(&self) -> Option<&str> {
        self.delete_marker_version_id.as_deref()
    }

    #[must_use]
    pub fn with_delete_marker_version_id(
        mut self,
        delete_marker_version_id: impl Into<String>,
    ) -> Self {
        self.delete_marker_version_id = Some(delete_marker_version_id.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// S3 Destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destination {
    pub access_control_translation: Option<AccessControlTranslation>,
    pub account: Option<String>,
    pub bucket: String,
    pub encryption_configuration: Option<EncryptionConfiguration>,
    pub metrics: Option<Metrics>,
    pub replication_time: Option<ReplicationTime>,
    pub storage_class: Option<StorageClass>,
}

impl Destination {
    /// Creates a `Destination` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn access_control_translation(&self) -> Option<&AccessControlTranslation> {
        self.access_control_translation.as_ref()
    }

    #[must_use]
    pub fn with_access_control_translation(
        mut self,
        access_control_translation: AccessControlTranslation,
    ) -> Self {
        self.access_control_translation = Some(access_control_translation);
        self
    }

    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn encryption_configuration(&self) -> Option<&EncryptionConfiguration> {
        self.encryption_configuration.as_ref()
    }

    #[must_use]
    pub fn with_encryption_configuration(
        mut self,
        encryption_configuration: EncryptionConfiguration,
    ) -> Self {
        self.encryption_configuration = Some(encryption_configuration);
        self
    }

    #[must_use]
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    #[must_use]
    pub fn replication_time(&self) -> Option<&ReplicationTime> {
        self.replication_time.as_ref()
    }

    #[must_use]
    pub fn with_replication_time(mut self, replication_time: ReplicationTime) -> Self {
        self.replication_time = Some(replication_time);
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<StorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }
}

/// S3 Encryption.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Encryption {
    pub encryption_type: ServerSideEncryption,
    pub kms_context: Option<String>,
    pub kms_key_id: Option<String>,
}

impl Encryption {
    /// Creates a `Encryption` from its required members.
    #[must_use]
    pub fn new(encryption_type: ServerSideEncryption) -> Self {
        Self {
            encryption_type,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn encryption_type(&self) -> ServerSideEncryption {
        self.encryption_type
    }

    #[must_use]
    pub fn with_encryption_type(mut self, encryption_type: ServerSideEncryption) -> Self {
        self.encryption_type = encryption_type;
        self
    }

    #[must_use]
    pub fn kms_context(&self) -> Option<&str> {
        self.kms_context.as_deref()
    }

    #[must_use]
    pub fn with_kms_context(mut self, kms_context: impl Into<String>) -> Self {
        self.kms_context = Some(kms_context.into());
        self
    }

    #[must_use]
    pub fn kms_key_id(&self) -> Option<&str> {
        self.kms_key_id.as_deref()
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }
}

impl fmt::Debug for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encryption")
            .field("encryption_type", &self.encryption_type)
            .field("kms_context", &self.kms_context.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .field("kms_key_id", &self.kms_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED))
            .finish()
    }
}

/// S3 EncryptionConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptionConfiguration {
    pub replica_kms_key_id: Option<String>,
}

impl EncryptionConfiguration {
    #[must_use]
    pub fn replica_kms_key_id(&self) -> Option<&str> {
        self.replica_kms_key_id.as_deref()
    }

    #[must_use]
    pub fn with_replica_kms_key_id(mut self, replica_kms_key_id: impl Into<String>) -> Self {
        self.replica_kms_key_id = Some(replica_kms_key_id.into());
        self
    }
}

/// S3 ErrorDocument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDocument {
    pub key: String,
}

impl ErrorDocument {
    /// Creates a `ErrorDocument` from its required members.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

/// S3 EventBridgeConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBridgeConfiguration {}

/// S3 ExistingObjectReplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingObjectReplication {
    pub status: ExistingObjectReplicationStatus,
}

impl ExistingObjectReplication {
    /// Creates a `ExistingObjectReplication` from its required members.
    #[must_use]
    pub fn new(status: ExistingObjectReplicationStatus) -> Self {
        Self {
            status,
        }
    }

    #[must_use]
    pub fn status(&self) -> ExistingObjectReplicationStatus {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: ExistingObjectReplicationStatus) -> Self {
        self.status = status;
        self
    }
}

/// S3 FilterRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRule {
    pub name: Option<FilterRuleName>,
    pub value: Option<String>,
}

impl FilterRule {
    #[must_use]
    pub fn name(&self) -> Option<FilterRuleName> {
        self.name
    }

    #[must_use]
    pub fn with_name(mut self, name: FilterRuleName) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// S3 GetObjectAttributesParts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectAttributesParts {
    pub is_truncated: Option<bool>,
    pub max_parts: Option<i32>,
    pub next_part_number_marker: Option<String>,
    pub part_number_marker: Option<String>,
    pub parts: Vec<ObjectPart>,
    pub total_parts_count: Option<i32>,
}

impl GetObjectAttributesParts {
    #[must_use]
    pub fn is_truncated(&self) -> Option<bool> {
        self.is_truncated
    }

    #[must_use]
    pub fn with_is_truncated(mut self, is_truncated: bool) -> Self {
        self.is_truncated = Some(is_truncated);
        self
    }

    #[must_use]
    pub fn max_parts(&self) -> Option<i32> {
        self.max_parts
    }

    #[must_use]
    pub fn with_max_parts(mut self, max_parts: i32) -> Self {
        self.max_parts = Some(max_parts);
        self
    }

    #[must_use]
    pub fn next_part_number_marker(&self) -> Option<&str> {
        self.next_part_number_marker.as_deref()
    }

    #[must_use]
    pub fn with_next_part_number_marker(
        mut self,
        next_part_number_marker: impl Into<String>,
    ) -> Self {
        self.next_part_number_marker = Some(next_part_number_marker.into());
        self
    }

    #[must_use]
    pub fn part_number_marker(&self) -> Option<&str> {
        self.part_number_marker.as_deref()
    }

    #[must_use]
    pub fn with_part_number_marker(mut self, part_number_marker: impl Into<String>) -> Self {
        self.part_number_marker = Some(part_number_marker.into());
        self
    }

    #[must_use]
    pub fn parts(&self) -> &[ObjectPart] {
        &self.parts
    }

    #[must_use]
    pub fn with_parts(mut self, parts: impl IntoIterator<Item = ObjectPart>) -> Self {
        self.parts = parts.into_iter().collect();
        self
    }

    #[must_use]
    pub fn total_parts_count(&self) -> Option<i32> {
        self.total_parts_count
    }

    #[must_use]
    pub fn with_total_parts_count(mut self, total_parts_count: i32) -> Self {
        self.total_parts_count = Some(total_parts_count);
        self
    }
}

/// S3 GlacierJobParameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlacierJobParameters {
    pub tier: Tier,
}

impl GlacierJobParameters {
    /// Creates a `GlacierJobParameters` from its required members.
    #[must_use]
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
        }
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }
}

/// S3 Grant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grant {
    pub grantee: Option<Grantee>,
    pub permission: Option<Permission>,
}

impl Grant {
    #[must_use]
    pub fn grantee(&self) -> Option<&Grantee> {
        self.grantee.as_ref()
    }

    #[must_use]
    pub fn with_grantee(mut self, grantee: Grantee) -> Self {
        self.grantee = Some(grantee);
        self
    }

    #[must_use]
    pub fn permission(&self) -> Option<Permission> {
        self.permission
    }

    #[must_use]
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = Some(permission);
        self
    }
}

/// S3 Grantee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grantee {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub id: Option<String>,
    pub r#type: Type,
    pub uri: Option<String>,
}

impl Grantee {
    /// Creates a `Grantee` from its required members.
    #[must_use]
    pub fn new(r#type: Type) -> Self {
        Self {
            r#type,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    #[must_use]
    pub fn with_email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn r#type(&self) -> Type {
        self.r#type
    }

    #[must_use]
    pub fn with_type(mut self, r#type: Type) -> Self {
        self.r#type = r#type;
        self
    }

    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
}

/// S3 IndexDocument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDocument {
    pub suffix: String,
}

impl IndexDocument {
    /// Creates a `IndexDocument` from its required members.
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// S3 Initiator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Initiator {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

impl Initiator {
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// S3 InputSerialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSerialization {
    pub compression_type: Option<CompressionType>,
    pub csv: Option<CSVInput>,
    pub json: Option<JSONInput>,
    pub parquet: Option<ParquetInput>,
}

impl InputSerialization {
    #[must_use]
    pub fn compression_type(&self) -> Option<CompressionType> {
        self.compression_type
    }

    #[must_use]
    pub fn with_compression_type(mut self, compression_type: CompressionType) -> Self {
        self.compression_type = Some(compression_type);
        self
    }

    #[must_use]
    pub fn csv(&self) -> Option<&CSVInput> {
        self.csv.as_ref()
    }

    #[must_use]
    pub fn with_csv(mut self, csv: CSVInput) -> Self {
        self.csv = Some(csv);
        self
    }

    #[must_use]
    pub fn json(&self) -> Option<&JSONInput> {
        self.json.as_ref()
    }

    #[must_use]
    pub fn with_json(mut self, json: JSONInput) -> Self {
        self.json = Some(json);
        self
    }

    #[must_use]
    pub fn parquet(&self) -> Option<&ParquetInput> {
        self.parquet.as_ref()
    }

    #[must_use]
    pub fn with_parquet(mut self, parquet: ParquetInput) -> Self {
        self.parquet = Some(parquet);
        self
    }
}

/// S3 IntelligentTieringAndOperator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntelligentTieringAndOperator {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
}

impl IntelligentTieringAndOperator {
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// S3 IntelligentTieringConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntelligentTieringConfiguration {
    pub filter: Option<IntelligentTieringFilter>,
    pub id: String,
    pub status: IntelligentTieringStatus,
    pub tierings: Vec<Tiering>,
}

impl IntelligentTieringConfiguration {
    /// Creates a `IntelligentTieringConfiguration` from its required members.
    #[must_use]
    pub fn new(id: impl Into<String>, status: IntelligentTieringStatus) -> Self {
        Self {
            id: id.into(),
            status,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn filter(&self) -> Option<&IntelligentTieringFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: IntelligentTieringFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn status(&self) -> IntelligentTieringStatus {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: IntelligentTieringStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn tierings(&self) -> &[Tiering] {
        &self.tierings
    }

    #[must_use]
    pub fn with_tierings(mut self, tierings: impl IntoIterator<Item = Tiering>) -> Self {
        self.tierings = tierings.into_iter().collect();
        self
    }
}

/// S3 IntelligentTieringFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntelligentTieringFilter {
    pub and: Option<IntelligentTieringAndOperator>,
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
}

impl IntelligentTieringFilter {
    #[must_use]
    pub fn and(&self) -> Option<&IntelligentTieringAndOperator> {
        self.and.as_ref()
    }

    #[must_use]
    pub fn with_and(mut self, and: IntelligentTieringAndOperator) -> Self {
        self.and = Some(and);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// S3 InventoryConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryConfiguration {
    pub destination: InventoryDestination,
    pub filter: Option<InventoryFilter>,
    pub id: String,
    pub included_object_versions: InventoryIncludedObjectVersions,
    pub is_enabled: bool,
    pub optional_fields: Vec<InventoryOptionalField>,
    pub schedule: InventorySchedule,
}

impl InventoryConfiguration {
    /// Creates a `InventoryConfiguration` from its required members.
    #[must_use]
    pub fn new(
        destination: InventoryDestination,
        id: impl Into<String>,
        included_object_versions: InventoryIncludedObjectVersions,
        is_enabled: bool,
        schedule: InventorySchedule,
    ) -> Self {
        Self {
            destination,
            id: id.into(),
            included_object_versions,
            is_enabled,
            schedule,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn destination(&self) -> &InventoryDestination {
        &self.destination
    }

    #[must_use]
    pub fn with_destination(mut self, destination: InventoryDestination) -> Self {
        self.destination = destination;
        self
    }

    #[must_use]
    pub fn filter(&self) -> Option<&InventoryFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: InventoryFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn included_object_versions(&self) -> InventoryIncludedObjectVersions {
        self.included_object_versions
    }

    #[must_use]
    pub fn with_included_object_versions(
        mut self,
        included_object_versions: InventoryIncludedObjectVersions,
    ) -> Self {
        self.included_object_versions = included_object_versions;
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    #[must_use]
    pub fn with_is_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    #[must_use]
    pub fn optional_fields(&self) -> &[InventoryOptionalField] {
        &self.optional_fields
    }

    #[must_use]
    pub fn with_optional_fields(
        mut self,
        optional_fields: impl IntoIterator<Item = InventoryOptionalField>,
    ) -> Self {
        self.optional_fields = optional_fields.into_iter().collect();
        self
    }

    #[must_use]
    pub fn schedule(&self) -> &InventorySchedule {
        &self.schedule
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: InventorySchedule) -> Self {
        self.schedule = schedule;
        self
    }
}

/// S3 InventoryDestination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryDestination {
    pub s3_bucket_destination: InventoryS3BucketDestination,
}

impl InventoryDestination {
    /// Creates a `InventoryDestination` from its required members.
    #[must_use]
    pub fn new(s3_bucket_destination: InventoryS3BucketDestination) -> Self {
        Self {
            s3_bucket_destination,
        }
    }

    #[must_use]
    pub fn s3_bucket_destination(&self) -> &InventoryS3BucketDestination {
        &self.s3_bucket_destination
    }

    #[must_use]
    pub fn with_s3_bucket_destination(
        mut self,
        s3_bucket_destination: InventoryS3BucketDestination,
    ) -> Self {
        self.s3_bucket_destination = s3_bucket_destination;
        self
    }
}

/// S3 InventoryEncryption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryEncryption {
    pub ssekms: Option<SSEKMS>,
    pub sses3: Option<SSES3>,
}

impl InventoryEncryption {
    #[must_use]
    pub fn ssekms(&self) -> Option<&SSEKMS> {
        self.ssekms.as_ref()
    }

    #[must_use]
    pub fn with_ssekms(mut self, ssekms: SSEKMS) -> Self {
        self.ssekms = Some(ssekms);
        self
    }

    #[must_use]
    pub fn sses3(&self) -> Option<&SSES3> {
        self.sses3.as_ref()
    }

    #[must_use]
    pub fn with_sses3(mut self, sses3: SSES3) -> Self {
        self.sses3 = Some(sses3);
        self
    }
}

/// S3 InventoryFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    pub prefix: String,
}

impl InventoryFilter {
    /// Creates a `InventoryFilter` from its required members.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// S3 InventoryS3BucketDestination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryS3BucketDestination {
    pub account_id: Option<String>,
    pub bucket: String,
    pub encryption: Option<InventoryEncryption>,
    pub format: InventoryFormat,
    pub prefix: Option<String>,
}

impl InventoryS3BucketDestination {
    /// Creates a `InventoryS3BucketDestination` from its required members.
    #[must_use]
    pub fn new(bucket: impl Into<String>, format: InventoryFormat) -> Self {
        Self {
            bucket: bucket.into(),
            format,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    #[must_use]
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    #[must_use]
    pub fn encryption(&self) -> Option<&InventoryEncryption> {
        self.encryption.as_ref()
    }

    #[must_use]
    pub fn with_encryption(mut self, encryption: InventoryEncryption) -> Self {
        self.encryption = Some(encryption);
        self
    }

    #[must_use]
    pub fn format(&self) -> InventoryFormat {
        self.format
    }

    #[must_use]
    pub fn with_format(mut self, format: InventoryFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// S3 InventorySchedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySchedule {
    pub frequency: InventoryFrequency,
}

impl InventorySchedule {
    /// Creates a `InventorySchedule` from its required members.
    #[must_use]
    pub fn new(frequency: InventoryFrequency) -> Self {
        Self {
            frequency,
        }
    }

    #[must_use]
    pub fn frequency(&self) -> InventoryFrequency {
        self.frequency
    }

    #[must_use]
    pub fn with_frequency(mut self, frequency: InventoryFrequency) -> Self {
        self.frequency = frequency;
        self
    }
}

/// S3 JSONInput.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JSONInput {
    pub r#type: Option<JSONType>,
}

impl JSONInput {
    #[must_use]
    pub fn r#type(&self) -> Option<JSONType> {
        self.r#type
    }

    #[must_use]
    pub fn with_type(mut self, r#type: JSONType) -> Self {
        self.r#type = Some(r#type);
        self
    }
}

/// S3 JSONOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JSONOutput {
    pub record_delimiter: Option<String>,
}

impl JSONOutput {
    #[must_use]
    pub fn record_delimiter(&self) -> Option<&str> {
        self.record_delimiter.as_deref()
    }

    #[must_use]
    pub fn with_record_delimiter(mut self, record_delimiter: impl Into<String>) -> Self {
        self.record_delimiter = Some(record_delimiter.into());
        self
    }
}

/// S3 LambdaFunctionConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LambdaFunctionConfiguration {
    pub events: Vec<Event>,
    pub filter: Option<NotificationConfigurationFilter>,
    pub id: Option<String>,
    pub lambda_function_arn: String,
}

impl LambdaFunctionConfiguration {
    /// Creates a `LambdaFunctionConfiguration` from its required members.
    #[must_use]
    pub fn new(lambda_function_arn: impl Into<String>) -> Self {
        Self {
            lambda_function_arn: lambda_function_arn.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events = events.into_iter().collect();
        self
    }

    #[must_use]
    pub fn filter(&self) -> Option<&NotificationConfigurationFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: NotificationConfigurationFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn lambda_function_arn(&self) -> &str {
        &self.lambda_function_arn
    }

    #[must_use]
    pub fn with_lambda_function_arn(mut self, lambda_function_arn: impl Into<String>) -> Self {
        self.lambda_function_arn = lambda_function_arn.into();
        self
    }
}

/// S3 LifecycleExpiration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleExpiration {
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub days: Option<i32>,
    pub expired_object_delete_marker: Option<bool>,
}

impl LifecycleExpiration {
    #[must_use]
    pub fn date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.date
    }

    #[must_use]
    pub fn with_date(mut self, date: chrono::DateTime<chrono::Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn days(&self) -> Option<i32> {
        self.days
    }

    #[must_use]
    pub fn with_days(mut self, days: i32) -> Self {
        self.days = Some(days);
        self
    }

    #[must_use]
    pub fn expired_object_delete_marker(&self) -> Option<bool> {
        self.expired_object_delete_marker
    }

    #[must_use]
    pub fn with_expired_object_delete_marker(mut self, expired_object_delete_marker: bool) -> Self {
        self.expired_object_delete_marker = Some(expired_object_delete_marker);
        self
    }
}

/// S3 LifecycleRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleRule {
    pub abort_incomplete_multipart_upload: Option<AbortIncompleteMultipartUpload>,
    pub expiration: Option<LifecycleExpiration>,
    pub filter: Option<LifecycleRuleFilter>,
    pub id: Option<String>,
    pub noncurrent_version_expiration: Option<NoncurrentVersionExpiration>,
    pub noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
    pub prefix: Option<String>,
    pub status: ExpirationStatus,
    pub transitions: Vec<Transition>,
}

impl LifecycleRule {
    /// Creates a `LifecycleRule` from its required members.
    #[must_use]
    pub fn new(status: ExpirationStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn abort_incomplete_multipart_upload(&self) -> Option<&AbortIncompleteMultipartUpload> {
        self.abort_incomplete_multipart_upload.as_ref()
    }

    #[must_use]
    pub fn with_abort_incomplete_multipart_upload(
        mut self,
        abort_incomplete_multipart_upload: AbortIncompleteMultipartUpload,
    ) -> Self {
        self.abort_incomplete_multipart_upload = Some(abort_incomplete_multipart_upload);
        self
    }

    #[must_use]
    pub fn expiration(&self) -> Option<&LifecycleExpiration> {
        self.expiration.as_ref()
    }

    #[must_use]
    pub fn with_expiration(mut self, expiration: LifecycleExpiration) -> Self {
        self.expiration = Some(expiration);
        self
    }

    #[must_use]
    pub fn filter(&self) -> Option<&LifecycleRuleFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: LifecycleRuleFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn noncurrent_version_expiration(&self) -> Option<&NoncurrentVersionExpiration> {
        self.noncurrent_version_expiration.as_ref()
    }

    #[must_use]
    pub fn with_noncurrent_version_expiration(
        mut self,
        noncurrent_version_expiration: NoncurrentVersionExpiration,
    ) -> Self {
        self.noncurrent_version_expiration = Some(noncurrent_version_expiration);
        self
    }

    #[must_use]
    pub fn noncurrent_version_transitions(&self) -> &[NoncurrentVersionTransition] {
        &self.noncurrent_version_transitions
    }

    #[must_use]
    pub fn with_noncurrent_version_transitions(
        mut self,
        noncurrent_version_transitions: impl IntoIterator<Item = NoncurrentVersionTransition>,
    ) -> Self {
        self.noncurrent_version_transitions = noncurrent_version_transitions.into_iter().collect();
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn status(&self) -> ExpirationStatus {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: ExpirationStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    #[must_use]
    pub fn with_transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions = transitions.into_iter().collect();
        self
    }
}

/// S3 LifecycleRuleAndOperator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleRuleAndOperator {
    pub object_size_greater_than: Option<i64>,
    pub object_size_less_than: Option<i64>,
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
}

impl LifecycleRuleAndOperator {
    #[must_use]
    pub fn object_size_greater_than(&self) -> Option<i64> {
        self.object_size_greater_than
    }

    #[must_use]
    pub fn with_object_size_greater_than(mut self, object_size_greater_than: i64) -> Self {
        self.object_size_greater_than = Some(object_size_greater_than);
        self
    }

    #[must_use]
    pub fn object_size_less_than(&self) -> Option<i64> {
        self.object_size_less_than
    }

    #[must_use]
    pub fn with_object_size_less_than(mut self, object_size_less_than: i64) -> Self {
        self.object_size_less_than = Some(object_size_less_than);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// S3 LifecycleRuleFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleRuleFilter {
    pub and: Option<LifecycleRuleAndOperator>,
    pub object_size_greater_than: Option<i64>,
    pub object_size_less_than: Option<i64>,
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
}

impl LifecycleRuleFilter {
    #[must_use]
    pub fn and(&self) -> Option<&LifecycleRuleAndOperator> {
        self.and.as_ref()
    }

    #[must_use]
    pub fn with_and(mut self, and: LifecycleRuleAndOperator) -> Self {
        self.and = Some(and);
        self
    }

    #[must_use]
    pub fn object_size_greater_than(&self) -> Option<i64> {
        self.object_size_greater_than
    }

    #[must_use]
    pub fn with_object_size_greater_than(mut self, object_size_greater_than: i64) -> Self {
        self.object_size_greater_than = Some(object_size_greater_than);
        self
    }

    #[must_use]
    pub fn object_size_less_than(&self) -> Option<i64> {
        self.object_size_less_than
    }

    #[must_use]
    pub fn with_object_size_less_than(mut self, object_size_less_than: i64) -> Self {
        self.object_size_less_than = Some(object_size_less_than);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// S3 LocationInfo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationInfo {
    pub name: Option<String>,
    pub r#type: Option<LocationType>,
}

impl LocationInfo {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn r#type(&self) -> Option<LocationType> {
        self.r#type
    }

    #[must_use]
    pub fn with_type(mut self, r#type: LocationType) -> Self {
        self.r#type = Some(r#type);
        self
    }
}

/// S3 LoggingEnabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingEnabled {
    pub target_bucket: String,
    pub target_grants: Vec<TargetGrant>,
    pub target_object_key_format: Option<TargetObjectKeyFormat>,
    pub target_prefix: String,
}

impl LoggingEnabled {
    /// Creates a `LoggingEnabled` from its required members.
    #[must_use]
    pub fn new(target_bucket: impl Into<String>, target_prefix: impl Into<String>) -> Self {
        Self {
            target_bucket: target_bucket.into(),
            target_prefix: target_prefix.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn target_bucket(&self) -> &str {
        &self.target_bucket
    }

    #[must_use]
    pub fn with_target_bucket(mut self, target_bucket: impl Into<String>) -> Self {
        self.target_bucket = target_bucket.into();
        self
    }

    #[must_use]
    pub fn target_grants(&self) -> &[TargetGrant] {
        &self.target_grants
    }

    #[must_use]
    pub fn with_target_grants(
        mut self,
        target_grants: impl IntoIterator<Item = TargetGrant>,
    ) -> Self {
        self.target_grants = target_grants.into_iter().collect();
        self
    }

    #[must_use]
    pub fn target_object_key_format(&self) -> Option<&TargetObjectKeyFormat> {
        self.target_object_key_format.as_ref()
    }

    #[must_use]
    pub fn with_target_object_key_format(
        mut self,
        target_object_key_format: TargetObjectKeyFormat,
    ) -> Self {
        self.target_object_key_format = Some(target_object_key_format);
        self
    }

    #[must_use]
    pub fn target_prefix(&self) -> &str {
        &self.target_prefix
    }

    #[must_use]
    pub fn with_target_prefix(mut self, target_prefix: impl Into<String>) -> Self {
        self.target_prefix = target_prefix.into();
        self
    }
}

/// S3 MetadataEntry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataEntry {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl MetadataEntry {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// S3 Metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    pub event_threshold: Option<ReplicationTimeValue>,
    pub status: MetricsStatus,
}

impl Metrics {
    /// Creates a `Metrics` from its required members.
    #[must_use]
    pub fn new(status: MetricsStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn event_threshold(&self) -> Option<&ReplicationTimeValue> {
        self.event_threshold.as_ref()
    }

    #[must_use]
    pub fn with_event_threshold(mut self, event_threshold: ReplicationTimeValue) -> Self {
        self.event_threshold = Some(event_threshold);
        self
    }

    #[must_use]
    pub fn status(&self) -> MetricsStatus {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: MetricsStatus) -> Self {
        self.status = status;
        self
    }
}

/// S3 MetricsAndOperator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsAndOperator {
    pub access_point_arn: Option<String>,
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
}

impl MetricsAndOperator {
    #[must_use]
    pub fn access_point_arn(&self) -> Option<&str> {
        self.access_point_arn.as_deref()
    }

    #[must_use]
    pub fn with_access_point_arn(mut self, access_point_arn: impl Into<String>) -> Self {
        self.access_point_arn = Some(access_point_arn.into());
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// S3 MetricsConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsConfiguration {
    pub filter: Option<MetricsFilter>,
    pub id: String,
}

impl MetricsConfiguration {
    /// Creates a `MetricsConfiguration` from its required members.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn filter(&self) -> Option<&MetricsFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: MetricsFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// S3 MetricsFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsFilter {
    pub access_point_arn: Option<String>,
    pub and: Option<MetricsAndOperator>,
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
}

impl MetricsFilter {
    #[must_use]
    pub fn access_point_arn(&self) -> Option<&str> {
        self.access_point_arn.as_deref()
    }

    #[must_use]
    pub fn with_access_point_arn(mut self, access_point_arn: impl Into<String>) -> Self {
        self.access_point_arn = Some(access_point_arn.into());
        self
    }

    #[must_use]
    pub fn and(&self) -> Option<&MetricsAndOperator> {
        self.and.as_ref()
    }

    #[must_use]
    pub fn with_and(mut self, and: MetricsAndOperator) -> Self {
        self.and = Some(and);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// S3 MultipartUpload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartUpload {
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    pub checksum_type: Option<ChecksumType>,
    pub initiated: Option<chrono::DateTime<chrono::Utc>>,
    pub initiator: Option<Initiator>,
    pub key: Option<String>,
    pub owner: Option<Owner>,
    pub storage_class: Option<StorageClass>,
    pub upload_id: Option<String>,
}

impl MultipartUpload {
    #[must_use]
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(mut self, checksum_algorithm: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(checksum_algorithm);
        self
    }

    #[must_use]
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    #[must_use]
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = Some(checksum_type);
        self
    }

    #[must_use]
    pub fn initiated(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.initiated
    }

    #[must_use]
    pub fn with_initiated(mut self, initiated: chrono::DateTime<chrono::Utc>) -> Self {
        self.initiated = Some(initiated);
        self
    }

    #[must_use]
    pub fn initiator(&self) -> Option<&Initiator> {
        self.initiator.as_ref()
    }

    #[must_use]
    pub fn with_initiator(mut self, initiator: Initiator) -> Self {
        self.initiator = Some(initiator);
        self
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<StorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    #[must_use]
    pub fn upload_id(&self) -> Option<&str> {
        self.upload_id.as_deref()
    }

    #[must_use]
    pub fn with_upload_id(mut self, upload_id: impl Into<String>) -> Self {
        self.upload_id = Some(upload_id.into());
        self
    }
}

/// S3 NoncurrentVersionExpiration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoncurrentVersionExpiration {
    pub newer_noncurrent_versions: Option<i32>,
    pub noncurrent_days: Option<i32>,
}

impl NoncurrentVersionExpiration {
    #[must_use]
    pub fn newer_noncurrent_versions(&self) -> Option<i32> {
        self.newer_noncurrent_versions
    }

    #[must_use]
    pub fn with_newer_noncurrent_versions(mut self, newer_noncurrent_versions: i32) -> Self {
        self.newer_noncurrent_versions = Some(newer_noncurrent_versions);
        self
    }

    #[must_use]
    pub fn noncurrent_days(&self) -> Option<i32> {
        self.noncurrent_days
    }

    #[must_use]
    pub fn with_noncurrent_days(mut self, noncurrent_days: i32) -> Self {
        self.noncurrent_days = Some(noncurrent_days);
        self
    }
}

/// S3 NoncurrentVersionTransition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoncurrentVersionTransition {
    pub newer_noncurrent_versions: Option<i32>,
    pub noncurrent_days: Option<i32>,
    pub storage_class: Option<TransitionStorageClass>,
}

impl NoncurrentVersionTransition {
    #[must_use]
    pub fn newer_noncurrent_versions(&self) -> Option<i32> {
        self.newer_noncurrent_versions
    }

    #[must_use]
    pub fn with_newer_noncurrent_versions(mut self, newer_noncurrent_versions: i32) -> Self {
        self.newer_noncurrent_versions = Some(newer_noncurrent_versions);
        self
    }

    #[must_use]
    pub fn noncurrent_days(&self) -> Option<i32> {
        self.noncurrent_days
    }

    #[must_use]
    pub fn with_noncurrent_days(mut self, noncurrent_days: i32) -> Self {
        self.noncurrent_days = Some(noncurrent_days);
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<TransitionStorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: TransitionStorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }
}

/// S3 NotificationConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationConfiguration {
    pub event_bridge_configuration: Option<EventBridgeConfiguration>,
    pub lambda_function_configurations: Vec<LambdaFunctionConfiguration>,
    pub queue_configurations: Vec<QueueConfiguration>,
    pub topic_configurations: Vec<TopicConfiguration>,
}

impl NotificationConfiguration {
    #[must_use]
    pub fn event_bridge_configuration(&self) -> Option<&EventBridgeConfiguration> {
        self.event_bridge_configuration.as_ref()
    }

    #[must_use]
    pub fn with_event_bridge_configuration(
        mut self,
        event_bridge_configuration: EventBridgeConfiguration,
    ) -> Self {
        self.event_bridge_configuration = Some(event_bridge_configuration);
        self
    }

    #[must_use]
    pub fn lambda_function_configurations(&self) -> &[LambdaFunctionConfiguration] {
        &self.lambda_function_configurations
    }

    #[must_use]
    pub fn with_lambda_function_configurations(
        mut self,
        lambda_function_configurations: impl IntoIterator<Item = LambdaFunctionConfiguration>,
    ) -> Self {
        self.lambda_function_configurations = lambda_function_configurations.into_iter().collect();
        self
    }

    #[must_use]
    pub fn queue_configurations(&self) -> &[QueueConfiguration] {
        &self.queue_configurations
    }

    #[must_use]
    pub fn with_queue_configurations(
        mut self,
        queue_configurations: impl IntoIterator<Item = QueueConfiguration>,
    ) -> Self {
        self.queue_configurations = queue_configurations.into_iter().collect();
        self
    }

    #[must_use]
    pub fn topic_configurations(&self) -> &[TopicConfiguration] {
        &self.topic_configurations
    }

    #[must_use]
    pub fn with_topic_configurations(
        mut self,
        topic_configurations: impl IntoIterator<Item = TopicConfiguration>,
    ) -> Self {
        self.topic_configurations = topic_configurations.into_iter().collect();
        self
    }
}

/// S3 NotificationConfigurationFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationConfigurationFilter {
    pub key: Option<S3KeyFilter>,
}

impl NotificationConfigurationFilter {
    #[must_use]
    pub fn key(&self) -> Option<&S3KeyFilter> {
        self.key.as_ref()
    }

    #[must_use]
    pub fn with_key(mut self, key: S3KeyFilter) -> Self {
        self.key = Some(key);
        self
    }
}

/// S3 Object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    pub checksum_algorithm: Vec<ChecksumAlgorithm>,
    pub checksum_type: Option<ChecksumType>,
    pub e_tag: Option<String>,
    pub key: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub owner: Option<Owner>,
    pub restore_status: Option<RestoreStatus>,
    pub size: Option<i64>,
    pub storage_class: Option<ObjectStorageClass>,
}

impl Object {
    #[must_use]
    pub fn checksum_algorithm(&self) -> &[ChecksumAlgorithm] {
        &self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(
        mut self,
        checksum_algorithm: impl IntoIterator<Item = ChecksumAlgorithm>,
    ) -> Self {
        self.checksum_algorithm = checksum_algorithm.into_iter().collect();
        self
    }

    #[must_use]
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    #[must_use]
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = Some(checksum_type);
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    #[must_use]
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn restore_status(&self) -> Option<&RestoreStatus> {
        self.restore_status.as_ref()
    }

    #[must_use]
    pub fn with_restore_status(mut self, restore_status: RestoreStatus) -> Self {
        self.restore_status = Some(restore_status);
        self
    }

    #[must_use]
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<ObjectStorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: ObjectStorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }
}

/// S3 ObjectIdentifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectIdentifier {
    pub e_tag: Option<String>,
    pub key: String,
    pub last_modified_time: Option<chrono::DateTime<chrono::Utc>>,
    pub size: Option<i64>,
    pub version_id: Option<String>,
}

impl ObjectIdentifier {
    /// Creates a `ObjectIdentifier` from its required members.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn last_modified_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified_time
    }

    #[must_use]
    pub fn with_last_modified_time(
        mut self,
        last_modified_time: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.last_modified_time = Some(last_modified_time);
        self
    }

    #[must_use]
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// S3 ObjectLockConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLockConfiguration {
    pub object_lock_enabled: Option<ObjectLockEnabled>,
    pub rule: Option<ObjectLockRule>,
}

impl ObjectLockConfiguration {
    #[must_use]
    pub fn object_lock_enabled(&self) -> Option<ObjectLockEnabled> {
        self.object_lock_enabled
    }

    #[must_use]
    pub fn with_object_lock_enabled(mut self, object_lock_enabled: ObjectLockEnabled) -> Self {
        self.object_lock_enabled = Some(object_lock_enabled);
        self
    }

    #[must_use]
    pub fn rule(&self) -> Option<&ObjectLockRule> {
        self.rule.as_ref()
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ObjectLockRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

/// S3 ObjectLockLegalHold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLockLegalHold {
    pub status: Option<ObjectLockLegalHoldStatus>,
}

impl ObjectLockLegalHold {
    #[must_use]
    pub fn status(&self) -> Option<ObjectLockLegalHoldStatus> {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: ObjectLockLegalHoldStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// S3 ObjectLockRetention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLockRetention {
    pub mode: Option<ObjectLockRetentionMode>,
    pub retain_until_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl ObjectLockRetention {
    #[must_use]
    pub fn mode(&self) -> Option<ObjectLockRetentionMode> {
        self.mode
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ObjectLockRetentionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn retain_until_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.retain_until_date
    }

    #[must_use]
    pub fn with_retain_until_date(
        mut self,
        retain_until_date: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.retain_until_date = Some(retain_until_date);
        self
    }
}

/// S3 ObjectLockRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLockRule {
    pub default_retention: Option<DefaultRetention>,
}

impl ObjectLockRule {
    #[must_use]
    pub fn default_retention(&self) -> Option<&DefaultRetention> {
        self.default_retention.as_ref()
    }

    #[must_use]
    pub fn with_default_retention(mut self, default_retention: DefaultRetention) -> Self {
        self.default_retention = Some(default_retention);
        self
    }
}

/// S3 ObjectPart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectPart {
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_crc64nvme: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
    pub part_number: Option<i32>,
    pub size: Option<i64>,
}

impl ObjectPart {
    #[must_use]
    pub fn checksum_crc32(&self) -> Option<&str> {
        self.checksum_crc32.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32(mut self, checksum_crc32: impl Into<String>) -> Self {
        self.checksum_crc32 = Some(checksum_crc32.into());
        self
    }

    #[must_use]
    pub fn checksum_crc32c(&self) -> Option<&str> {
        self.checksum_crc32c.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32c(mut self, checksum_crc32c: impl Into<String>) -> Self {
        self.checksum_crc32c = Some(checksum_crc32c.into());
        self
    }

    #[must_use]
    pub fn checksum_crc64nvme(&self) -> Option<&str> {
        self.checksum_crc64nvme.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc64nvme(mut self, checksum_crc64nvme: impl Into<String>) -> Self {
        self.checksum_crc64nvme = Some(checksum_crc64nvme.into());
        self
    }

    #[must_use]
    pub fn checksum_sha1(&self) -> Option<&str> {
        self.checksum_sha1.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha1(mut self, checksum_sha1: impl Into<String>) -> Self {
        self.checksum_sha1 = Some(checksum_sha1.into());
        self
    }

    #[must_use]
    pub fn checksum_sha256(&self) -> Option<&str> {
        self.checksum_sha256.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha256(mut self, checksum_sha256: impl Into<String>) -> Self {
        self.checksum_sha256 = Some(checksum_sha256.into());
        self
    }

    #[must_use]
    pub fn part_number(&self) -> Option<i32> {
        self.part_number
    }

    #[must_use]
    pub fn with_part_number(mut self, part_number: i32) -> Self {
        self.part_number = Some(part_number);
        self
    }

    #[must_use]
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }
}

/// S3 ObjectVersion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectVersion {
    pub checksum_algorithm: Vec<ChecksumAlgorithm>,
    pub checksum_type: Option<ChecksumType>,
    pub e_tag: Option<String>,
    pub is_latest: Option<bool>,
    pub key: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub owner: Option<Owner>,
    pub restore_status: Option<RestoreStatus>,
    pub size: Option<i64>,
    pub storage_class: Option<ObjectVersionStorageClass>,
    pub version_id: Option<String>,
}

impl ObjectVersion {
    #[must_use]
    pub fn checksum_algorithm(&self) -> &[ChecksumAlgorithm] {
        &self.checksum_algorithm
    }

    #[must_use]
    pub fn with_checksum_algorithm(
        mut self,
        checksum_algorithm: impl IntoIterator<Item = ChecksumAlgorithm>,
    ) -> Self {
        self.checksum_algorithm = checksum_algorithm.into_iter().collect();
        self
    }

    #[must_use]
    pub fn checksum_type(&self) -> Option<ChecksumType> {
        self.checksum_type
    }

    #[must_use]
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = Some(checksum_type);
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn is_latest(&self) -> Option<bool> {
        self.is_latest
    }

    #[must_use]
    pub fn with_is_latest(mut self, is_latest: bool) -> Self {
        self.is_latest = Some(is_latest);
        self
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    #[must_use]
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn restore_status(&self) -> Option<&RestoreStatus> {
        self.restore_status.as_ref()
    }

    #[must_use]
    pub fn with_restore_status(mut self, restore_status: RestoreStatus) -> Self {
        self.restore_status = Some(restore_status);
        self
    }

    #[must_use]
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<ObjectVersionStorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: ObjectVersionStorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

/// S3 OutputLocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLocation {
    pub s3: Option<S3Location>,
}

impl OutputLocation {
    #[must_use]
    pub fn s3(&self) -> Option<&S3Location> {
        self.s3.as_ref()
    }

    #[must_use]
    pub fn with_s3(mut self, s3: S3Location) -> Self {
        self.s3 = Some(s3);
        self
    }
}

/// S3 OutputSerialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSerialization {
    pub csv: Option<CSVOutput>,
    pub json: Option<JSONOutput>,
}

impl OutputSerialization {
    #[must_use]
    pub fn csv(&self) -> Option<&CSVOutput> {
        self.csv.as_ref()
    }

    #[must_use]
    pub fn with_csv(mut self, csv: CSVOutput) -> Self {
        self.csv = Some(csv);
        self
    }

    #[must_use]
    pub fn json(&self) -> Option<&JSONOutput> {
        self.json.as_ref()
    }

    #[must_use]
    pub fn with_json(mut self, json: JSONOutput) -> Self {
        self.json = Some(json);
        self
    }
}

/// S3 Owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Owner {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

impl Owner {
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// S3 OwnershipControls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipControls {
    pub rules: Vec<OwnershipControlsRule>,
}

impl OwnershipControls {
    #[must_use]
    pub fn rules(&self) -> &[OwnershipControlsRule] {
        &self.rules
    }

    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = OwnershipControlsRule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }
}

/// S3 OwnershipControlsRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipControlsRule {
    pub object_ownership: ObjectOwnership,
}

impl OwnershipControlsRule {
    /// Creates a `OwnershipControlsRule` from its required members.
    #[must_use]
    pub fn new(object_ownership: ObjectOwnership) -> Self {
        Self {
            object_ownership,
        }
    }

    #[must_use]
    pub fn object_ownership(&self) -> ObjectOwnership {
        self.object_ownership
    }

    #[must_use]
    pub fn with_object_ownership(mut self, object_ownership: ObjectOwnership) -> Self {
        self.object_ownership = object_ownership;
        self
    }
}

/// S3 ParquetInput.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParquetInput {}

/// S3 Part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Part {
    pub checksum_crc32: Option<String>,
    pub checksum_crc32c: Option<String>,
    pub checksum_crc64nvme: Option<String>,
    pub checksum_sha1: Option<String>,
    pub checksum_sha256: Option<String>,
    pub e_tag: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub part_number: Option<i32>,
    pub size: Option<i64>,
}

impl Part {
    #[must_use]
    pub fn checksum_crc32(&self) -> Option<&str> {
        self.checksum_crc32.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32(mut self, checksum_crc32: impl Into<String>) -> Self {
        self.checksum_crc32 = Some(checksum_crc32.into());
        self
    }

    #[must_use]
    pub fn checksum_crc32c(&self) -> Option<&str> {
        self.checksum_crc32c.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc32c(mut self, checksum_crc32c: impl Into<String>) -> Self {
        self.checksum_crc32c = Some(checksum_crc32c.into());
        self
    }

    #[must_use]
    pub fn checksum_crc64nvme(&self) -> Option<&str> {
        self.checksum_crc64nvme.as_deref()
    }

    #[must_use]
    pub fn with_checksum_crc64nvme(mut self, checksum_crc64nvme: impl Into<String>) -> Self {
        self.checksum_crc64nvme = Some(checksum_crc64nvme.into());
        self
    }

    #[must_use]
    pub fn checksum_sha1(&self) -> Option<&str> {
        self.checksum_sha1.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha1(mut self, checksum_sha1: impl Into<String>) -> Self {
        self.checksum_sha1 = Some(checksum_sha1.into());
        self
    }

    #[must_use]
    pub fn checksum_sha256(&self) -> Option<&str> {
        self.checksum_sha256.as_deref()
    }

    #[must_use]
    pub fn with_checksum_sha256(mut self, checksum_sha256: impl Into<String>) -> Self {
        self.checksum_sha256 = Some(checksum_sha256.into());
        self
    }

    #[must_use]
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    #[must_use]
    pub fn with_e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.e_tag = Some(e_tag.into());
        self
    }

    #[must_use]
    pub fn last_modified(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: chrono::DateTime<chrono::Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    #[must_use]
    pub fn part_number(&self) -> Option<i32> {
        self.part_number
    }

    #[must_use]
    pub fn with_part_number(mut self, part_number: i32) -> Self {
        self.part_number = Some(part_number);
        self
    }

    #[must_use]
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    #[must_use]
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }
}

/// S3 PartitionedPrefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedPrefix {
    pub partition_date_source: Option<PartitionDateSource>,
}

impl PartitionedPrefix {
    #[must_use]
    pub fn partition_date_source(&self) -> Option<PartitionDateSource> {
        self.partition_date_source
    }

    #[must_use]
    pub fn with_partition_date_source(
        mut self,
        partition_date_source: PartitionDateSource,
    ) -> Self {
        self.partition_date_source = Some(partition_date_source);
        self
    }
}

/// S3 PolicyStatus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyStatus {
    pub is_public: Option<bool>,
}

impl PolicyStatus {
    #[must_use]
    pub fn is_public(&self) -> Option<bool> {
        self.is_public
    }

    #[must_use]
    pub fn with_is_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }
}

/// S3 PublicAccessBlockConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicAccessBlockConfiguration {
    pub block_public_acls: Option<bool>,
    pub block_public_policy: Option<bool>,
    pub ignore_public_acls: Option<bool>,
    pub restrict_public_buckets: Option<bool>,
}

impl PublicAccessBlockConfiguration {
    #[must_use]
    pub fn block_public_acls(&self) -> Option<bool> {
        self.block_public_acls
    }

    #[must_use]
    pub fn with_block_public_acls(mut self, block_public_acls: bool) -> Self {
        self.block_public_acls = Some(block_public_acls);
        self
    }

    #[must_use]
    pub fn block_public_policy(&self) -> Option<bool> {
        self.block_public_policy
    }

    #[must_use]
    pub fn with_block_public_policy(mut self, block_public_policy: bool) -> Self {
        self.block_public_policy = Some(block_public_policy);
        self
    }

    #[must_use]
    pub fn ignore_public_acls(&self) -> Option<bool> {
        self.ignore_public_acls
    }

    #[must_use]
    pub fn with_ignore_public_acls(mut self, ignore_public_acls: bool) -> Self {
        self.ignore_public_acls = Some(ignore_public_acls);
        self
    }

    #[must_use]
    pub fn restrict_public_buckets(&self) -> Option<bool> {
        self.restrict_public_buckets
    }

    #[must_use]
    pub fn with_restrict_public_buckets(mut self, restrict_public_buckets: bool) -> Self {
        self.restrict_public_buckets = Some(restrict_public_buckets);
        self
    }
}

/// S3 QueueConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueConfiguration {
    pub events: Vec<Event>,
    pub filter: Option<NotificationConfigurationFilter>,
    pub id: Option<String>,
    pub queue_arn: String,
}

impl QueueConfiguration {
    /// Creates a `QueueConfiguration` from its required members.
    #[must_use]
    pub fn new(queue_arn: impl Into<String>) -> Self {
        Self {
            queue_arn: queue_arn.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events = events.into_iter().collect();
        self
    }

    #[must_use]
    pub fn filter(&self) -> Option<&NotificationConfigurationFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: NotificationConfigurationFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn queue_arn(&self) -> &str {
        &self.queue_arn
    }

    #[must_use]
    pub fn with_queue_arn(mut self, queue_arn: impl Into<String>) -> Self {
        self.queue_arn = queue_arn.into();
        self
    }
}

/// S3 Redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redirect {
    pub host_name: Option<String>,
    pub http_redirect_code: Option<String>,
    pub protocol: Option<Protocol>,
    pub replace_key_prefix_with: Option<String>,
    pub replace_key_with: Option<String>,
}

impl Redirect {
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.host_name.as_deref()
    }

    #[must_use]
    pub fn with_host_name(mut self, host_name: impl Into<String>) -> Self {
        self.host_name = Some(host_name.into());
        self
    }

    #[must_use]
    pub fn http_redirect_code(&self) -> Option<&str> {
        self.http_redirect_code.as_deref()
    }

    #[must_use]
    pub fn with_http_redirect_code(mut self, http_redirect_code: impl Into<String>) -> Self {
        self.http_redirect_code = Some(http_redirect_code.into());
        self
    }

    #[must_use]
    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    #[must_use]
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    #[must_use]
    pub fn replace_key_prefix_with(&self) -> Option<&str> {
        self.replace_key_prefix_with.as_deref()
    }

    #[must_use]
    pub fn with_replace_key_prefix_with(
        mut self,
        replace_key_prefix_with: impl Into<String>,
    ) -> Self {
        self.replace_key_prefix_with = Some(replace_key_prefix_with.into());
        self
    }

    #[must_use]
    pub fn replace_key_with(&self) -> Option<&str> {
        self.replace_key_with.as_deref()
    }

    #[must_use]
    pub fn with_replace_key_with(mut self, replace_key_with: impl Into<String>) -> Self {
        self.replace_key_with = Some(replace_key_with.into());
        self
    }
}

/// S3 RedirectAllRequestsTo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectAllRequestsTo {
    pub host_name: String,
    pub protocol: Option<Protocol>,
}

impl RedirectAllRequestsTo {
    /// Creates a `RedirectAllRequestsTo` from its required members.
    #[must_use]
    pub fn new(host_name: impl Into<String>) -> Self {
        Self {
            host_name: host_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    #[must_use]
    pub fn with_host_name(mut self, host_name: impl Into<String>) -> Self {
        self.host_name = host_name.into();
        self
    }

    #[must_use]
    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    #[must_use]
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }
}

/// S3 ReplicaModifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicaModifications {
    pub status: ReplicaModificationsStatus,
}

impl ReplicaModifications {
    /// Creates a `ReplicaModifications` from its required members.
    #[must_use]
    pub fn new(status: ReplicaModificationsStatus) -> Self {
        Self {
            status,
        }
    }

    #[must_use]
    pub fn status(&self) -> ReplicaModificationsStatus {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: ReplicaModificationsStatus) -> Self {
        self.status = status;
        self
    }
}

/// S3 ReplicationConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationConfiguration {
    pub role: String,
    pub rules: Vec<ReplicationRule>,
}

impl ReplicationConfiguration {
    /// Creates a `ReplicationConfiguration` from its required members.
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[ReplicationRule] {
        &self.rules
    }

    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = ReplicationRule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }
}

/// S3 ReplicationRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationRule {
    pub delete_marker_replication: Option<DeleteMarkerReplication>,
    pub destination: Destination,
    pub existing_object_replication: Option<ExistingObjectReplication>,
    pub filter: Option<ReplicationRuleFilter>,
    pub id: Option<String>,
    pub prefix: Option<String>,
    pub priority: Option<i32>,
    pub source_selection_criteria: Option<SourceSelectionCriteria>,
    pub status: ReplicationRuleStatus,
}

impl ReplicationRule {
    /// Creates a `ReplicationRule` from its required members.
    #[must_use]
    pub fn new(destination: Destination, status: ReplicationRuleStatus) -> Self {
        Self {
            destination,
            status,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn delete_marker_replication(&self) -> Option<&DeleteMarkerReplication> {
        self.delete_marker_replication.as_ref()
    }

    #[must_use]
    pub fn with_delete_marker_replication(
        mut self,
        delete_marker_replication: DeleteMarkerReplication,
    ) -> Self {
        self.delete_marker_replication = Some(delete_marker_replication);
        self
    }

    #[must_use]
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    #[must_use]
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    #[must_use]
    pub fn existing_object_replication(&self) -> Option<&ExistingObjectReplication> {
        self.existing_object_replication.as_ref()
    }

    #[must_use]
    pub fn with_existing_object_replication(
        mut self,
        existing_object_replication: ExistingObjectReplication,
    ) -> Self {
        self.existing_object_replication = Some(existing_object_replication);
        self
    }

    #[must_use]
    pub fn filter(&self) -> Option<&ReplicationRuleFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: ReplicationRuleFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn source_selection_criteria(&self) -> Option<&SourceSelectionCriteria> {
        self.source_selection_criteria.as_ref()
    }

    #[must_use]
    pub fn with_source_selection_criteria(
        mut self,
        source_selection_criteria: SourceSelectionCriteria,
    ) -> Self {
        self.source_selection_criteria = Some(source_selection_criteria);
        self
    }

    #[must_use]
    pub fn status(&self) -> ReplicationRuleStatus {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: ReplicationRuleStatus) -> Self {
        self.status = status;
        self
    }
}

/// S3 ReplicationRuleAndOperator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationRuleAndOperator {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
}

impl ReplicationRuleAndOperator {
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// S3 ReplicationRuleFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationRuleFilter {
    pub and: Option<ReplicationRuleAndOperator>,
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
}

impl ReplicationRuleFilter {
    #[must_use]
    pub fn and(&self) -> Option<&ReplicationRuleAndOperator> {
        self.and.as_ref()
    }

    #[must_use]
    pub fn with_and(mut self, and: ReplicationRuleAndOperator) -> Self {
        self.and = Some(and);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// S3 ReplicationTime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationTime {
    pub status: ReplicationTimeStatus,
    pub time: ReplicationTimeValue,
}

impl ReplicationTime {
    /// Creates a `ReplicationTime` from its required members.
    #[must_use]
    pub fn new(status: ReplicationTimeStatus, time: ReplicationTimeValue) -> Self {
        Self {
            status,
            time,
        }
    }

    #[must_use]
    pub fn status(&self) -> ReplicationTimeStatus {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: ReplicationTimeStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn time(&self) -> &ReplicationTimeValue {
        &self.time
    }

    #[must_use]
    pub fn with_time(mut self, time: ReplicationTimeValue) -> Self {
        self.time = time;
        self
    }
}

/// S3 ReplicationTimeValue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationTimeValue {
    pub minutes: Option<i32>,
}

impl ReplicationTimeValue {
    #[must_use]
    pub fn minutes(&self) -> Option<i32> {
        self.minutes
    }

    #[must_use]
    pub fn with_minutes(mut self, minutes: i32) -> Self {
        self.minutes = Some(minutes);
        self
    }
}

/// S3 RequestPaymentConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPaymentConfiguration {
    pub payer: Payer,
}

impl RequestPaymentConfiguration {
    /// Creates a `RequestPaymentConfiguration` from its required members.
    #[must_use]
    pub fn new(payer: Payer) -> Self {
        Self {
            payer,
        }
    }

    #[must_use]
    pub fn payer(&self) -> Payer {
        self.payer
    }

    #[must_use]
    pub fn with_payer(mut self, payer: Payer) -> Self {
        self.payer = payer;
        self
    }
}

/// S3 RestoreRequest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreRequest {
    pub days: Option<i32>,
    pub description: Option<String>,
    pub glacier_job_parameters: Option<GlacierJobParameters>,
    pub output_location: Option<OutputLocation>,
    pub select_parameters: Option<SelectParameters>,
    pub tier: Option<Tier>,
    pub r#type: Option<RestoreRequestType>,
}

impl RestoreRequest {
    #[must_use]
    pub fn days(&self) -> Option<i32> {
        self.days
    }

    #[must_use]
    pub fn with_days(mut self, days: i32) -> Self {
        self.days = Some(days);
        self
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn glacier_job_parameters(&self) -> Option<&GlacierJobParameters> {
        self.glacier_job_parameters.as_ref()
    }

    #[must_use]
    pub fn with_glacier_job_parameters(
        mut self,
        glacier_job_parameters: GlacierJobParameters,
    ) -> Self {
        self.glacier_job_parameters = Some(glacier_job_parameters);
        self
    }

    #[must_use]
    pub fn output_location(&self) -> Option<&OutputLocation> {
        self.output_location.as_ref()
    }

    #[must_use]
    pub fn with_output_location(mut self, output_location: OutputLocation) -> Self {
        self.output_location = Some(output_location);
        self
    }

    #[must_use]
    pub fn select_parameters(&self) -> Option<&SelectParameters> {
        self.select_parameters.as_ref()
    }

    #[must_use]
    pub fn with_select_parameters(mut self, select_parameters: SelectParameters) -> Self {
        self.select_parameters = Some(select_parameters);
        self
    }

    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    #[must_use]
    pub fn r#type(&self) -> Option<RestoreRequestType> {
        self.r#type
    }

    #[must_use]
    pub fn with_type(mut self, r#type: RestoreRequestType) -> Self {
        self.r#type = Some(r#type);
        self
    }
}

/// S3 RestoreStatus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreStatus {
    pub is_restore_in_progress: Option<bool>,
    pub restore_expiry_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl RestoreStatus {
    #[must_use]
    pub fn is_restore_in_progress(&self) -> Option<bool> {
        self.is_restore_in_progress
    }

    #[must_use]
    pub fn with_is_restore_in_progress(mut self, is_restore_in_progress: bool) -> Self {
        self.is_restore_in_progress = Some(is_restore_in_progress);
        self
    }

    #[must_use]
    pub fn restore_expiry_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.restore_expiry_date
    }

    #[must_use]
    pub fn with_restore_expiry_date(
        mut self,
        restore_expiry_date: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.restore_expiry_date = Some(restore_expiry_date);
        self
    }
}

/// S3 RoutingRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingRule {
    pub condition: Option<Condition>,
    pub redirect: Redirect,
}

impl RoutingRule {
    /// Creates a `RoutingRule` from its required members.
    #[must_use]
    pub fn new(redirect: Redirect) -> Self {
        Self {
            redirect,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use]
    pub fn redirect(&self) -> &Redirect {
        &self.redirect
    }

    #[must_use]
    pub fn with_redirect(mut self, redirect: Redirect) -> Self {
        self.redirect = redirect;
        self
    }
}

/// S3 S3KeyFilter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3KeyFilter {
    pub filter_rules: Vec<FilterRule>,
}

impl S3KeyFilter {
    #[must_use]
    pub fn filter_rules(&self) -> &[FilterRule] {
        &self.filter_rules
    }

    #[must_use]
    pub fn with_filter_rules(mut self, filter_rules: impl IntoIterator<Item = FilterRule>) -> Self {
        self.filter_rules = filter_rules.into_iter().collect();
        self
    }
}

/// S3 S3Location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3Location {
    pub access_control_list: Vec<Grant>,
    pub bucket_name: String,
    pub canned_acl: Option<ObjectCannedACL>,
    pub encryption: Option<Encryption>,
    pub prefix: String,
    pub storage_class: Option<StorageClass>,
    pub tagging: Option<Tagging>,
    pub user_metadata: Vec<MetadataEntry>,
}

impl S3Location {
    /// Creates a `S3Location` from its required members.
    #[must_use]
    pub fn new(bucket_name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn access_control_list(&self) -> &[Grant] {
        &self.access_control_list
    }

    #[must_use]
    pub fn with_access_control_list(
        mut self,
        access_control_list: impl IntoIterator<Item = Grant>,
    ) -> Self {
        self.access_control_list = access_control_list.into_iter().collect();
        self
    }

    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    #[must_use]
    pub fn with_bucket_name(mut self, bucket_name: impl Into<String>) -> Self {
        self.bucket_name = bucket_name.into();
        self
    }

    #[must_use]
    pub fn canned_acl(&self) -> Option<ObjectCannedACL> {
        self.canned_acl
    }

    #[must_use]
    pub fn with_canned_acl(mut self, canned_acl: ObjectCannedACL) -> Self {
        self.canned_acl = Some(canned_acl);
        self
    }

    #[must_use]
    pub fn encryption(&self) -> Option<&Encryption> {
        self.encryption.as_ref()
    }

    #[must_use]
    pub fn with_encryption(mut self, encryption: Encryption) -> Self {
        self.encryption = Some(encryption);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<StorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: StorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }

    #[must_use]
    pub fn tagging(&self) -> Option<&Tagging> {
        self.tagging.as_ref()
    }

    #[must_use]
    pub fn with_tagging(mut self, tagging: Tagging) -> Self {
        self.tagging = Some(tagging);
        self
    }

    #[must_use]
    pub fn user_metadata(&self) -> &[MetadataEntry] {
        &self.user_metadata
    }

    #[must_use]
    pub fn with_user_metadata(
        mut self,
        user_metadata: impl IntoIterator<Item = MetadataEntry>,
    ) -> Self {
        self.user_metadata = user_metadata.into_iter().collect();
        self
    }
}

/// S3 SSEKMS.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SSEKMS {
    pub key_id: String,
}

impl SSEKMS {
    /// Creates a `SSEKMS` from its required members.
    #[must_use]
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
        }
    }

    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    #[must_use]
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = key_id.into();
        self
    }
}

impl fmt::Debug for SSEKMS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SSEKMS")
            .field("key_id", &SENSITIVE_DATA_REDACTED)
            .finish()
    }
}

/// S3 SSES3.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SSES3 {}

/// S3 SelectParameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectParameters {
    pub expression: String,
    pub expression_type: ExpressionType,
    pub input_serialization: InputSerialization,
    pub output_serialization: OutputSerialization,
}

impl SelectParameters {
    /// Creates a `SelectParameters` from its required members.
    #[must_use]
    pub fn new(
        expression: impl Into<String>,
        expression_type: ExpressionType,
        input_serialization: InputSerialization,
        output_serialization: OutputSerialization,
    ) -> Self {
        Self {
            expression: expression.into(),
            expression_type,
            input_serialization,
            output_serialization,
        }
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    #[must_use]
    pub fn expression_type(&self) -> ExpressionType {
        self.expression_type
    }

    #[must_use]
    pub fn with_expression_type(mut self, expression_type: ExpressionType) -> Self {
        self.expression_type = expression_type;
        self
    }

    #[must_use]
    pub fn input_serialization(&self) -> &InputSerialization {
        &self.input_serialization
    }

    #[must_use]
    pub fn with_input_serialization(mut self, input_serialization: InputSerialization) -> Self {
        self.input_serialization = input_serialization;
        self
    }

    #[must_use]
    pub fn output_serialization(&self) -> &OutputSerialization {
        &self.output_serialization
    }

    #[must_use]
    pub fn with_output_serialization(mut self, output_serialization: OutputSerialization) -> Self {
        self.output_serialization = output_serialization;
        self
    }
}

/// S3 ServerSideEncryptionByDefault.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ServerSideEncryptionByDefault {
    pub kms_master_key_id: Option<String>,
    pub sse_algorithm: ServerSideEncryption,
}

impl ServerSideEncryptionByDefault {
    /// Creates a `ServerSideEncryptionByDefault` from its required members.
    #[must_use]
    pub fn new(sse_algorithm: ServerSideEncryption) -> Self {
        Self {
            sse_algorithm,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn kms_master_key_id(&self) -> Option<&str> {
        self.kms_master_key_id.as_deref()
    }

    #[must_use]
    pub fn with_kms_master_key_id(mut self, kms_master_key_id: impl Into<String>) -> Self {
        self.kms_master_key_id = Some(kms_master_key_id.into());
        self
    }

    #[must_use]
    pub fn sse_algorithm(&self) -> ServerSideEncryption {
        self.sse_algorithm
    }

    #[must_use]
    pub fn with_sse_algorithm(mut self, sse_algorithm: ServerSideEncryption) -> Self {
        self.sse_algorithm = sse_algorithm;
        self
    }
}

impl fmt::Debug for ServerSideEncryptionByDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSideEncryptionByDefault")
            .field(
                "kms_master_key_id",
                &self.kms_master_key_id.as_ref().map(|_| SENSITIVE_DATA_REDACTED),
            )
            .field("sse_algorithm", &self.sse_algorithm)
            .finish()
    }
}

/// S3 ServerSideEncryptionConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSideEncryptionConfiguration {
    pub rules: Vec<ServerSideEncryptionRule>,
}

impl ServerSideEncryptionConfiguration {
    #[must_use]
    pub fn rules(&self) -> &[ServerSideEncryptionRule] {
        &self.rules
    }

    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = ServerSideEncryptionRule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }
}

/// S3 ServerSideEncryptionRule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSideEncryptionRule {
    pub apply_server_side_encryption_by_default: Option<ServerSideEncryptionByDefault>,
    pub blocked_encryption_types: Option<BlockedEncryptionTypes>,
    pub bucket_key_enabled: Option<bool>,
}

impl ServerSideEncryptionRule {
    #[must_use]
    pub fn apply_server_side_encryption_by_default(
        &self,
    ) -> Option<&ServerSideEncryptionByDefault> {
        self.apply_server_side_encryption_by_default.as_ref()
    }

    #[must_use]
    pub fn with_apply_server_side_encryption_by_default(
        mut self,
        apply_server_side_encryption_by_default: ServerSideEncryptionByDefault,
    ) -> Self {
        self.apply_server_side_encryption_by_default = Some(apply_server_side_encryption_by_default);
        self
    }

    #[must_use]
    pub fn blocked_encryption_types(&self) -> Option<&BlockedEncryptionTypes> {
        self.blocked_encryption_types.as_ref()
    }

    #[must_use]
    pub fn with_blocked_encryption_types(
        mut self,
        blocked_encryption_types: BlockedEncryptionTypes,
    ) -> Self {
        self.blocked_encryption_types = Some(blocked_encryption_types);
        self
    }

    #[must_use]
    pub fn bucket_key_enabled(&self) -> Option<bool> {
        self.bucket_key_enabled
    }

    #[must_use]
    pub fn with_bucket_key_enabled(mut self, bucket_key_enabled: bool) -> Self {
        self.bucket_key_enabled = Some(bucket_key_enabled);
        self
    }
}

/// S3 SimplePrefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplePrefix {}

/// S3 SourceSelectionCriteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSelectionCriteria {
    pub replica_modifications: Option<ReplicaModifications>,
    pub sse_kms_encrypted_objects: Option<SseKmsEncryptedObjects>,
}

impl SourceSelectionCriteria {
    #[must_use]
    pub fn replica_modifications(&self) -> Option<&ReplicaModifications> {
        self.replica_modifications.as_ref()
    }

    #[must_use]
    pub fn with_replica_modifications(
        mut self,
        replica_modifications: ReplicaModifications,
    ) -> Self {
        self.replica_modifications = Some(replica_modifications);
        self
    }

    #[must_use]
    pub fn sse_kms_encrypted_objects(&self) -> Option<&SseKmsEncryptedObjects> {
        self.sse_kms_encrypted_objects.as_ref()
    }

    #[must_use]
    pub fn with_sse_kms_encrypted_objects(
        mut self,
        sse_kms_encrypted_objects: SseKmsEncryptedObjects,
    ) -> Self {
        self.sse_kms_encrypted_objects = Some(sse_kms_encrypted_objects);
        self
    }
}

/// S3 SseKmsEncryptedObjects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SseKmsEncryptedObjects {
    pub status: SseKmsEncryptedObjectsStatus,
}

impl SseKmsEncryptedObjects {
    /// Creates a `SseKmsEncryptedObjects` from its required members.
    #[must_use]
    pub fn new(status: SseKmsEncryptedObjectsStatus) -> Self {
        Self {
            status,
        }
    }

    #[must_use]
    pub fn status(&self) -> SseKmsEncryptedObjectsStatus {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: SseKmsEncryptedObjectsStatus) -> Self {
        self.status = status;
        self
    }
}

/// S3 StorageClassAnalysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageClassAnalysis {
    pub data_export: Option<StorageClassAnalysisDataExport>,
}

impl StorageClassAnalysis {
    #[must_use]
    pub fn data_export(&self) -> Option<&StorageClassAnalysisDataExport> {
        self.data_export.as_ref()
    }

    #[must_use]
    pub fn with_data_export(mut self, data_export: StorageClassAnalysisDataExport) -> Self {
        self.data_export = Some(data_export);
        self
    }
}

/// S3 StorageClassAnalysisDataExport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageClassAnalysisDataExport {
    pub destination: AnalyticsExportDestination,
    pub output_schema_version: StorageClassAnalysisSchemaVersion,
}

impl StorageClassAnalysisDataExport {
    /// Creates a `StorageClassAnalysisDataExport` from its required members.
    #[must_use]
    pub fn new(
        destination: AnalyticsExportDestination,
        output_schema_version: StorageClassAnalysisSchemaVersion,
    ) -> Self {
        Self {
            destination,
            output_schema_version,
        }
    }

    #[must_use]
    pub fn destination(&self) -> &AnalyticsExportDestination {
        &self.destination
    }

    #[must_use]
    pub fn with_destination(mut self, destination: AnalyticsExportDestination) -> Self {
        self.destination = destination;
        self
    }

    #[must_use]
    pub fn output_schema_version(&self) -> StorageClassAnalysisSchemaVersion {
        self.output_schema_version
    }

    #[must_use]
    pub fn with_output_schema_version(
        mut self,
        output_schema_version: StorageClassAnalysisSchemaVersion,
    ) -> Self {
        self.output_schema_version = output_schema_version;
        self
    }
}

/// S3 Tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Creates a `Tag` from its required members.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// S3 Tagging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tagging {
    pub tag_set: Vec<Tag>,
}

impl Tagging {
    #[must_use]
    pub fn tag_set(&self) -> &[Tag] {
        &self.tag_set
    }

    #[must_use]
    pub fn with_tag_set(mut self, tag_set: impl IntoIterator<Item = Tag>) -> Self {
        self.tag_set = tag_set.into_iter().collect();
        self
    }
}

/// S3 TargetGrant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetGrant {
    pub grantee: Option<Grantee>,
    pub permission: Option<BucketLogsPermission>,
}

impl TargetGrant {
    #[must_use]
    pub fn grantee(&self) -> Option<&Grantee> {
        self.grantee.as_ref()
    }

    #[must_use]
    pub fn with_grantee(mut self, grantee: Grantee) -> Self {
        self.grantee = Some(grantee);
        self
    }

    #[must_use]
    pub fn permission(&self) -> Option<BucketLogsPermission> {
        self.permission
    }

    #[must_use]
    pub fn with_permission(mut self, permission: BucketLogsPermission) -> Self {
        self.permission = Some(permission);
        self
    }
}

/// S3 TargetObjectKeyFormat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetObjectKeyFormat {
    pub partitioned_prefix: Option<PartitionedPrefix>,
    pub simple_prefix: Option<SimplePrefix>,
}

impl TargetObjectKeyFormat {
    #[must_use]
    pub fn partitioned_prefix(&self) -> Option<&PartitionedPrefix> {
        self.partitioned_prefix.as_ref()
    }

    #[must_use]
    pub fn with_partitioned_prefix(mut self, partitioned_prefix: PartitionedPrefix) -> Self {
        self.partitioned_prefix = Some(partitioned_prefix);
        self
    }

    #[must_use]
    pub fn simple_prefix(&self) -> Option<&SimplePrefix> {
        self.simple_prefix.as_ref()
    }

    #[must_use]
    pub fn with_simple_prefix(mut self, simple_prefix: SimplePrefix) -> Self {
        self.simple_prefix = Some(simple_prefix);
        self
    }
}

/// S3 Tiering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tiering {
    pub access_tier: IntelligentTieringAccessTier,
    pub days: i32,
}

impl Tiering {
    /// Creates a `Tiering` from its required members.
    #[must_use]
    pub fn new(access_tier: IntelligentTieringAccessTier, days: i32) -> Self {
        Self {
            access_tier,
            days,
        }
    }

    #[must_use]
    pub fn access_tier(&self) -> IntelligentTieringAccessTier {
        self.access_tier
    }

    #[must_use]
    pub fn with_access_tier(mut self, access_tier: IntelligentTieringAccessTier) -> Self {
        self.access_tier = access_tier;
        self
    }

    #[must_use]
    pub fn days(&self) -> i32 {
        self.days
    }

    #[must_use]
    pub fn with_days(mut self, days: i32) -> Self {
        self.days = days;
        self
    }
}

/// S3 TopicConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicConfiguration {
    pub events: Vec<Event>,
    pub filter: Option<NotificationConfigurationFilter>,
    pub id: Option<String>,
    pub topic_arn: String,
}

impl TopicConfiguration {
    /// Creates a `TopicConfiguration` from its required members.
    #[must_use]
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events = events.into_iter().collect();
        self
    }

    #[must_use]
    pub fn filter(&self) -> Option<&NotificationConfigurationFilter> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: NotificationConfigurationFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }

    #[must_use]
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = topic_arn.into();
        self
    }
}

/// S3 Transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    pub days: Option<i32>,
    pub storage_class: Option<TransitionStorageClass>,
}

impl Transition {
    #[must_use]
    pub fn date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.date
    }

    #[must_use]
    pub fn with_date(mut self, date: chrono::DateTime<chrono::Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn days(&self) -> Option<i32> {
        self.days
    }

    #[must_use]
    pub fn with_days(mut self, days: i32) -> Self {
        self.days = Some(days);
        self
    }

    #[must_use]
    pub fn storage_class(&self) -> Option<TransitionStorageClass> {
        self.storage_class
    }

    #[must_use]
    pub fn with_storage_class(mut self, storage_class: TransitionStorageClass) -> Self {
        self.storage_class = Some(storage_class);
        self
    }
}

/// S3 VersioningConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersioningConfiguration {
    pub mfa_delete: Option<MFADelete>,
    pub status: Option<BucketVersioningStatus>,
}

impl VersioningConfiguration {
    #[must_use]
    pub fn mfa_delete(&self) -> Option<MFADelete> {
        self.mfa_delete
    }

    #[must_use]
    pub fn with_mfa_delete(mut self, mfa_delete: MFADelete) -> Self {
        self.mfa_delete = Some(mfa_delete);
        self
    }

    #[must_use]
    pub fn status(&self) -> Option<BucketVersioningStatus> {
        self.status
    }

    #[must_use]
    pub fn with_status(mut self, status: BucketVersioningStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// S3 WebsiteConfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteConfiguration {
    pub error_document: Option<ErrorDocument>,
    pub index_document: Option<IndexDocument>,
    pub redirect_all_requests_to: Option<RedirectAllRequestsTo>,
    pub routing_rules: Vec<RoutingRule>,
}

impl WebsiteConfiguration {
    #[must_use]
    pub fn error_document(&self) -> Option<&ErrorDocument> {
        self.error_document.as_ref()
    }

    #[must_use]
    pub fn with_error_document(mut self, error_document: ErrorDocument) -> Self {
        self.error_document = Some(error_document);
        self
    }

    #[must_use]
    pub fn index_document(&self) -> Option<&IndexDocument> {
        self.index_document.as_ref()
    }

    #[must_use]
    pub fn with_index_document(mut self, index_document: IndexDocument) -> Self {
        self.index_document = Some(index_document);
        self
    }

    #[must_use]
    pub fn redirect_all_requests_to(&self) -> Option<&RedirectAllRequestsTo> {
        self.redirect_all_requests_to.as_ref()
    }

    #[must_use]
    pub fn with_redirect_all_requests_to(
        mut self,
        redirect_all_requests_to: RedirectAllRequestsTo,
    ) -> Self {
        self.redirect_all_requests_to = Some(redirect_all_requests_to);
        self
    }

    #[must_use]
    pub fn routing_rules(&self) -> &[RoutingRule] {
        &self.routing_rules
    }

    #[must_use]
    pub fn with_routing_rules(
        mut self,
        routing_rules: impl IntoIterator<Item = RoutingRule>,
    ) -> Self {
        self.routing_rules = routing_rules.into_iter().collect();
        self
    }
}
