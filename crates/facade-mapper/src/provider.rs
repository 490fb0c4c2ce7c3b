//! Provider metadata the host uses to register the mapper and render its
//! configuration form.

use crate::config::CONFIG_FACADE_ISSUER_URL;
use crate::mapper::FacadeIssuerMapper;
use serde::Serialize;

/// Unique provider ID under which the host registers this mapper.
pub const PROVIDER_ID: &str = "oidc-facade-issuer-mapper";

pub const DISPLAY_TYPE: &str = "Facade Issuer Mapper";

/// Admin console category shared by all claim mappers.
pub const TOKEN_MAPPER_CATEGORY: &str = "Token mapper";

pub const HELP_TEXT: &str = "Overrides the token issuer when request comes through an auth facade";

/// Input type of a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyType {
    String,
}

/// One field of the mapper's configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProperty {
    pub name: &'static str,
    pub label: &'static str,
    pub help_text: &'static str,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub default_value: &'static str,
}

static CONFIG_PROPERTIES: [ConfigProperty; 1] = [ConfigProperty {
    name: CONFIG_FACADE_ISSUER_URL,
    label: "Facade Issuer URL",
    help_text: "URL to use as issuer when request comes through auth facade (X-Auth-Facade-Request header is present)",
    property_type: PropertyType::String,
    default_value: "",
}];

/// Metadata a host needs to list and configure a protocol mapper.
pub trait ProtocolMapperProvider {
    fn id(&self) -> &'static str;

    fn display_type(&self) -> &'static str;

    fn display_category(&self) -> &'static str;

    fn help_text(&self) -> &'static str;

    fn config_properties(&self) -> &'static [ConfigProperty];
}

impl ProtocolMapperProvider for FacadeIssuerMapper {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn display_type(&self) -> &'static str {
        DISPLAY_TYPE
    }

    fn display_category(&self) -> &'static str {
        TOKEN_MAPPER_CATEGORY
    }

    fn help_text(&self) -> &'static str {
        HELP_TEXT
    }

    fn config_properties(&self) -> &'static [ConfigProperty] {
        &CONFIG_PROPERTIES
    }
}
