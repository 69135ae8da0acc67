use crate::compliance::domain::{SbomComponent, SbomDocument};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    component: Component,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: String,
    version: String,
    purl: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// This adapter implements the SbomFormatter port. The evaluated module is
/// emitted as `metadata.component`, carrying the `fips:*` properties.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_component(&self, component: &SbomComponent) -> Component {
        Component {
            component_type: component.component_type(),
            name: component.name().to_string(),
            version: component.version().to_string(),
            purl: component.purl().to_string(),
            properties: component
                .properties()
                .iter()
                .map(|p| Property {
                    name: p.name().to_string(),
                    value: p.value().to_string(),
                })
                .collect(),
        }
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format_sbom(&self, sbom: &SbomDocument) -> Result<String> {
        let bom = Bom {
            bom_format: SbomDocument::BOM_FORMAT,
            spec_version: SbomDocument::SPEC_VERSION,
            version: 1,
            serial_number: sbom.serial_number().to_string(),
            metadata: Metadata {
                timestamp: sbom.timestamp().to_rfc3339_opts(SecondsFormat::Secs, true),
                tools: vec![Tool {
                    name: sbom.tool_name().to_string(),
                    version: sbom.tool_version().to_string(),
                }],
                component: self.build_component(sbom.component()),
            },
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}
