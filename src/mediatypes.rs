//! Media-types for API objects.

use strum_macros::{Display, EnumString};

/// Known registry media-types, as defined by the Docker distribution
/// manifest specifications (v2-1 and v2-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum MediaTypes {
    /// Manifest, version 2 schema 1.
    #[strum(serialize = "application/vnd.docker.distribution.manifest.v1+json")]
    ManifestV2S1,
    /// Signed manifest, version 2 schema 1.
    #[strum(serialize = "application/vnd.docker.distribution.manifest.v1+prettyjws")]
    ManifestV2S1Signed,
    /// Manifest, version 2 schema 2.
    #[strum(serialize = "application/vnd.docker.distribution.manifest.v2+json")]
    ManifestV2S2,
    /// Configuration object for a container.
    #[strum(serialize = "application/vnd.docker.container.image.v1+json")]
    ContainerConfigV1,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mediatypes_roundtrip() {
        let schema2 = "application/vnd.docker.distribution.manifest.v2+json";
        assert_eq!(MediaTypes::ManifestV2S2.to_string(), schema2);
        assert_eq!(MediaTypes::from_str(schema2).unwrap(), MediaTypes::ManifestV2S2);
    }
}
