use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Metadata exactly as the backend reports it for a stat (HEAD) call
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawObjectMetadata {
    #[serde(default)]
    pub storage_class: Option<String>,
    /// Value of the restore status header, e.g. `ongoing-request="true"`
    #[serde(default)]
    pub restore: Option<String>,
    #[serde(default)]
    pub content_length: u64,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub etag: Option<String>,
}

impl RawObjectMetadata {
    pub fn storage_class(&self) -> StorageClass {
        self.storage_class
            .as_deref()
            .map_or(StorageClass::Standard, StorageClass::parse)
    }

    pub fn restore_status(&self) -> Option<RestoreStatus> {
        self.restore.as_deref().map(RestoreStatus::parse)
    }
}

/// Storage classes an object can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageClass {
    Standard,
    ReducedRedundancy,
    StandardIa,
    OnezoneIa,
    IntelligentTiering,
    Glacier,
    /// Glacier Instant Retrieval: cold pricing, but readable without a restore
    GlacierIr,
    DeepArchive,
    Outposts,
    Snow,
    ExpressOnezone,
    Other(String),
}

impl StorageClass {
    pub fn as_str(&self) -> &str {
        match self {
            StorageClass::Standard => "STANDARD",
            StorageClass::ReducedRedundancy => "REDUCED_REDUNDANCY",
            StorageClass::StandardIa => "STANDARD_IA",
            StorageClass::OnezoneIa => "ONEZONE_IA",
            StorageClass::IntelligentTiering => "INTELLIGENT_TIERING",
            StorageClass::Glacier => "GLACIER",
            StorageClass::GlacierIr => "GLACIER_IR",
            StorageClass::DeepArchive => "DEEP_ARCHIVE",
            StorageClass::Outposts => "OUTPOSTS",
            StorageClass::Snow => "SNOW",
            StorageClass::ExpressOnezone => "EXPRESS_ONEZONE",
            StorageClass::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "STANDARD" => StorageClass::Standard,
            "REDUCED_REDUNDANCY" => StorageClass::ReducedRedundancy,
            "STANDARD_IA" => StorageClass::StandardIa,
            "ONEZONE_IA" => StorageClass::OnezoneIa,
            "INTELLIGENT_TIERING" => StorageClass::IntelligentTiering,
            "GLACIER" => StorageClass::Glacier,
            "GLACIER_IR" => StorageClass::GlacierIr,
            "DEEP_ARCHIVE" => StorageClass::DeepArchive,
            "OUTPOSTS" => StorageClass::Outposts,
            "SNOW" => StorageClass::Snow,
            "EXPRESS_ONEZONE" => StorageClass::ExpressOnezone,
            _ => StorageClass::Other(s.to_string()),
        }
    }

    /// Whether objects in this class must be restored before a GET succeeds.
    ///
    /// Unknown classes count as archival when they look like one (`GLACIER*`,
    /// `*ARCHIVE*`), which covers other vendors' cold tiers.
    pub fn requires_restore(&self) -> bool {
        match self {
            StorageClass::Glacier | StorageClass::DeepArchive => true,
            StorageClass::GlacierIr => false,
            StorageClass::Other(s) => {
                let upper = s.to_ascii_uppercase();
                (upper.starts_with("GLACIER") && upper != "GLACIER_IR")
                    || upper.contains("ARCHIVE")
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for StorageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed restore status header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreStatus {
    /// `ongoing-request="true"`
    InProgress,
    /// `ongoing-request="false"`, usually with `expiry-date="..."`
    Completed { expiry: Option<String> },
    /// Header present but not in a form we know
    Unrecognized(String),
}

impl RestoreStatus {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("ongoing-request=\"true\"") {
            return RestoreStatus::InProgress;
        }
        if raw.starts_with("ongoing-request=\"false\"") {
            let expiry = raw
                .split_once("expiry-date=\"")
                .and_then(|(_, rest)| rest.split_once('"'))
                .map(|(date, _)| date.to_string());
            return RestoreStatus::Completed { expiry };
        }
        RestoreStatus::Unrecognized(raw.to_string())
    }
}
