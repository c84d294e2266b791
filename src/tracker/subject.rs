//! Subject
//!
//! Turns a [`SubjectConfiguration`] into the payload snapshot merged
//! into every tracked event.

use crate::configuration::SubjectConfiguration;
use crate::constants::params;
use crate::payload::Payload;

pub struct Subject {
    configuration: SubjectConfiguration,
}

impl Subject {
    pub fn new(configuration: SubjectConfiguration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &SubjectConfiguration {
        &self.configuration
    }

    pub fn configuration_mut(&mut self) -> &mut SubjectConfiguration {
        &mut self.configuration
    }

    /// The subject's wire parameters. Only set fields appear.
    pub fn payload(&self) -> Payload {
        let config = &self.configuration;
        let mut payload = Payload::new();
        if let Some(user_id) = config.user_id() {
            payload.add(params::UID, user_id);
        }
        if let Some(domain_user_id) = config.domain_user_id() {
            payload.add(params::DOMAIN_UID, domain_user_id);
        }
        if let Some(network_user_id) = config.network_user_id() {
            payload.add(params::NETWORK_UID, network_user_id);
        }
        if let Some(useragent) = config.useragent() {
            payload.add(params::USERAGENT, useragent);
        }
        if let Some(ip_address) = config.ip_address() {
            payload.add(params::IP_ADDRESS, ip_address);
        }
        if let Some(timezone) = config.timezone() {
            payload.add(params::TIMEZONE, timezone);
        }
        if let Some(language) = config.language() {
            payload.add(params::LANGUAGE, language);
        }
        if let Some(resolution) = config.screen_resolution() {
            payload.add(params::RESOLUTION, &resolution.to_string());
        }
        if let Some(view_port) = config.screen_view_port() {
            payload.add(params::VIEWPORT, &view_port.to_string());
        }
        if let Some(color_depth) = config.color_depth() {
            payload.add(params::COLOR_DEPTH, &color_depth.to_string());
        }
        payload
    }
}
