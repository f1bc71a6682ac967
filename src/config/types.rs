use serde::Deserialize;

/// Boxover configuration file structure.
///
/// Geometry defaults cover only the shared extents; corner positions are
/// always given on the command line or at the prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoxoverConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Default shared length (x extent)
    pub length: Option<i64>,
    /// Default shared breadth (y extent)
    pub breadth: Option<i64>,
    /// Verdict output format: "text" or "json"
    pub format: Option<String>,
}

impl Default for BoxoverConfig {
    fn default() -> Self {
        Self {
            version: 1,
            length: None,
            breadth: None,
            format: None,
        }
    }
}
