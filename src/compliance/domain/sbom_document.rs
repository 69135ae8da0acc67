use chrono::{DateTime, Utc};

/// Name/value annotation attached to the SBOM component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomProperty {
    name: String,
    value: String,
}

impl SbomProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The single evaluated component described by the SBOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomComponent {
    name: String,
    version: String,
    purl: String,
    properties: Vec<SbomProperty>,
}

impl SbomComponent {
    pub fn new(name: String, version: String, purl: String, properties: Vec<SbomProperty>) -> Self {
        Self {
            name,
            version,
            purl,
            properties,
        }
    }

    /// CycloneDX component type; the evaluated module is always a library
    pub fn component_type(&self) -> &'static str {
        "library"
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn purl(&self) -> &str {
        &self.purl
    }

    pub fn properties(&self) -> &[SbomProperty] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(SbomProperty::value)
    }
}

/// SbomDocument value object: a CycloneDX-shaped description of the evaluated module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomDocument {
    serial_number: String,
    timestamp: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
    component: SbomComponent,
}

impl SbomDocument {
    pub const BOM_FORMAT: &'static str = "CycloneDX";
    pub const SPEC_VERSION: &'static str = "1.6";

    pub fn new(
        serial_number: String,
        timestamp: DateTime<Utc>,
        tool_name: String,
        tool_version: String,
        component: SbomComponent,
    ) -> Self {
        Self {
            serial_number,
            timestamp,
            tool_name,
            tool_version,
            component,
        }
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn component(&self) -> &SbomComponent {
        &self.component
    }
}
