//! Protocol Constants
//!
//! Single source of truth for wire-format key names, schema URIs and
//! emitter defaults. Collector compatibility depends on these exact
//! values; to change the wire contract, only edit this file.

/// Tracker version string sent with every event under `tv`.
pub const TRACKER_VERSION: &str = concat!("rust-", env!("CARGO_PKG_VERSION"));

/// Default platform code sent under `p`.
pub const DEFAULT_PLATFORM: &str = "mob";

/// Payload parameter keys (short names, fixed by the collector protocol).
pub mod params {
    /// Event type code
    pub const EVENT: &str = "e";
    /// Event id (UUID)
    pub const EID: &str = "eid";
    /// Device-recorded timestamp, epoch millis
    pub const TIMESTAMP: &str = "dtm";
    /// Application-asserted true timestamp, epoch millis
    pub const TRUE_TIMESTAMP: &str = "ttm";
    /// Tracker version
    pub const TRACKER_VERSION: &str = "tv";
    /// Tracker namespace
    pub const NAMESPACE: &str = "tna";
    /// Application id
    pub const APP_ID: &str = "aid";
    /// Platform code
    pub const PLATFORM: &str = "p";
    /// Custom contexts envelope (serialized JSON)
    pub const CONTEXT: &str = "co";
    /// Self-describing event envelope (serialized JSON)
    pub const UNSTRUCTURED: &str = "ue_pr";

    // Structured event
    pub const SE_CATEGORY: &str = "se_ca";
    pub const SE_ACTION: &str = "se_ac";
    pub const SE_LABEL: &str = "se_la";
    pub const SE_PROPERTY: &str = "se_pr";
    pub const SE_VALUE: &str = "se_va";

    // Page view
    pub const PAGE_URL: &str = "url";
    pub const PAGE_TITLE: &str = "page";
    pub const PAGE_REFR: &str = "refr";

    // Subject
    pub const UID: &str = "uid";
    pub const DOMAIN_UID: &str = "duid";
    pub const NETWORK_UID: &str = "nuid";
    pub const USERAGENT: &str = "ua";
    pub const IP_ADDRESS: &str = "ip";
    pub const TIMEZONE: &str = "tz";
    pub const LANGUAGE: &str = "lang";
    pub const RESOLUTION: &str = "res";
    pub const VIEWPORT: &str = "vp";
    pub const COLOR_DEPTH: &str = "cd";
}

/// Event type codes sent under `e`.
pub mod events {
    pub const STRUCTURED: &str = "se";
    pub const UNSTRUCTURED: &str = "ue";
    pub const PAGE_VIEW: &str = "pv";
}

/// Self-describing schema URIs.
pub mod schemas {
    /// POST batch envelope
    pub const PAYLOAD_DATA: &str =
        "iglu:com.snowplowanalytics.snowplow/payload_data/jsonschema/1-0-4";
    /// Custom contexts envelope
    pub const CONTEXTS: &str =
        "iglu:com.snowplowanalytics.snowplow/contexts/jsonschema/1-0-1";
    /// Self-describing event envelope
    pub const UNSTRUCT_EVENT: &str =
        "iglu:com.snowplowanalytics.snowplow/unstruct_event/jsonschema/1-0-0";
    /// Screen view event
    pub const SCREEN_VIEW: &str =
        "iglu:com.snowplowanalytics.mobile/screen_view/jsonschema/1-0-0";
    /// Timing event
    pub const TIMING: &str =
        "iglu:com.snowplowanalytics.snowplow/timing/jsonschema/1-0-0";
    /// Session context
    pub const CLIENT_SESSION: &str =
        "iglu:com.snowplowanalytics.snowplow/client_session/jsonschema/1-0-1";
}

/// Collector endpoint paths.
pub mod endpoints {
    /// Single-event GET path
    pub const GET_PATH: &str = "/i";
    /// Batch POST path
    pub const POST_PATH: &str = "/com.snowplowanalytics.snowplow/tp2";
}

/// Emitter defaults.
pub mod defaults {
    /// Maximum events pulled from the store per request cycle
    pub const EMIT_RANGE: usize = 150;
    /// Byte ceiling for a GET request payload
    pub const BYTE_LIMIT_GET: u64 = 40_000;
    /// Byte ceiling for a POST request payload
    pub const BYTE_LIMIT_POST: u64 = 40_000;
    /// Maximum concurrent in-flight requests
    pub const THREAD_POOL_SIZE: usize = 2;
}
