/// How class members (methods, properties, events) appear in the output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum MemberStyle {
    /// Members become top-level resources, linked from their class through
    /// `methods`, `properties` and `events` relationships.
    #[default]
    Linked,

    /// Members are embedded verbatim in their class's `attributes` and are
    /// not emitted as resources.
    Embedded,
}

impl std::str::FromStr for MemberStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linked" => Ok(Self::Linked),
            "embedded" => Ok(Self::Embedded),
            _ => Err(format!("Invalid member style: {}", s)),
        }
    }
}

/// Options for [`convert_with`](crate::convert_with).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct ConvertOptions {
    pub members: MemberStyle,
}

impl ConvertOptions {
    pub fn with_members(members: MemberStyle) -> Self {
        Self { members }
    }
}
