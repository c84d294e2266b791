//! Subject Configuration
//!
//! Basic information about the user and app environment, attached to
//! every event by the tracker's subject layer. Nothing here is probed
//! from the device; every field is host-supplied.

use serde::{Deserialize, Serialize};

/// A width/height pair, serialized on the wire as `WxH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Host-supplied description of the user and environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectConfiguration {
    user_id: Option<String>,
    network_user_id: Option<String>,
    domain_user_id: Option<String>,
    useragent: Option<String>,
    ip_address: Option<String>,
    timezone: Option<String>,
    language: Option<String>,
    screen_resolution: Option<Size>,
    screen_view_port: Option<Size>,
    color_depth: Option<u32>,
}

impl SubjectConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    // Fluent setup methods

    /// The custom user id.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The network user id. Not generated by the tracker; supplied by
    /// the host when instrumenting.
    pub fn with_network_user_id(mut self, network_user_id: impl Into<String>) -> Self {
        self.network_user_id = Some(network_user_id.into());
        self
    }

    /// The domain user id. Host-supplied.
    pub fn with_domain_user_id(mut self, domain_user_id: impl Into<String>) -> Self {
        self.domain_user_id = Some(domain_user_id.into());
        self
    }

    pub fn with_useragent(mut self, useragent: impl Into<String>) -> Self {
        self.useragent = Some(useragent.into());
        self
    }

    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_screen_resolution(mut self, screen_resolution: Size) -> Self {
        self.screen_resolution = Some(screen_resolution);
        self
    }

    pub fn with_screen_view_port(mut self, screen_view_port: Size) -> Self {
        self.screen_view_port = Some(screen_view_port);
        self
    }

    pub fn with_color_depth(mut self, color_depth: u32) -> Self {
        self.color_depth = Some(color_depth);
        self
    }

    // Getters and setters

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn set_user_id(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    pub fn network_user_id(&self) -> Option<&str> {
        self.network_user_id.as_deref()
    }

    pub fn set_network_user_id(&mut self, network_user_id: Option<String>) {
        self.network_user_id = network_user_id;
    }

    pub fn domain_user_id(&self) -> Option<&str> {
        self.domain_user_id.as_deref()
    }

    pub fn set_domain_user_id(&mut self, domain_user_id: Option<String>) {
        self.domain_user_id = domain_user_id;
    }

    pub fn useragent(&self) -> Option<&str> {
        self.useragent.as_deref()
    }

    pub fn set_useragent(&mut self, useragent: Option<String>) {
        self.useragent = useragent;
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn set_ip_address(&mut self, ip_address: Option<String>) {
        self.ip_address = ip_address;
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn set_timezone(&mut self, timezone: Option<String>) {
        self.timezone = timezone;
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }

    pub fn screen_resolution(&self) -> Option<Size> {
        self.screen_resolution
    }

    pub fn set_screen_resolution(&mut self, screen_resolution: Option<Size>) {
        self.screen_resolution = screen_resolution;
    }

    pub fn screen_view_port(&self) -> Option<Size> {
        self.screen_view_port
    }

    pub fn set_screen_view_port(&mut self, screen_view_port: Option<Size>) {
        self.screen_view_port = screen_view_port;
    }

    pub fn color_depth(&self) -> Option<u32> {
        self.color_depth
    }

    pub fn set_color_depth(&mut self, color_depth: Option<u32>) {
        self.color_depth = color_depth;
    }

    /// Field-wise duplication. Mutating the copy never affects the
    /// original.
    pub fn copy(&self) -> Self {
        Self {
            user_id: self.user_id.clone(),
            network_user_id: self.network_user_id.clone(),
            domain_user_id: self.domain_user_id.clone(),
            useragent: self.useragent.clone(),
            ip_address: self.ip_address.clone(),
            timezone: self.timezone.clone(),
            language: self.language.clone(),
            screen_resolution: self.screen_resolution,
            screen_view_port: self.screen_view_port,
            color_depth: self.color_depth,
        }
    }
}
