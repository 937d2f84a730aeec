//! Source location metadata attached to records

use std::borrow::Cow;
use std::fmt;

/// Where a log call came from. Every field is optional.
///
/// Renders as `{package}.{function}/{file}:{line}`, dropping the delimiters
/// of absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    package: Option<Cow<'static, str>>,
    function: Option<Cow<'static, str>>,
    file: Option<Cow<'static, str>>,
    line: Option<u32>,
}

impl Location {
    /// A location with no fields set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            package: None,
            function: None,
            file: None,
            line: None,
        }
    }

    /// File and line of the code calling this function.
    ///
    /// Through `#[track_caller]` functions this is the outermost tracked caller.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new()
            .with_file(caller.file())
            .with_line(caller.line())
    }

    /// Builder-style method for setting the package
    #[must_use]
    pub fn with_package(mut self, package: impl Into<Cow<'static, str>>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Builder-style method for setting the function
    #[must_use]
    pub fn with_function(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Builder-style method for setting the file
    #[must_use]
    pub fn with_file(mut self, file: impl Into<Cow<'static, str>>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Builder-style method for setting the line.
    ///
    /// Lines are numeric, matching `line!()` and the `log`/`tracing` metadata.
    /// Free-form annotations belong in the message rather than the location.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Package name, if recorded
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Function name, if recorded
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// File name, if recorded
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Line number, if recorded
    #[must_use]
    pub const fn line(&self) -> Option<u32> {
        self.line
    }

    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.package.is_none() && self.function.is_none() && self.file.is_none() && self.line.is_none()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_scope = self.package.is_some() || self.function.is_some();
        let has_position = self.file.is_some() || self.line.is_some();

        if let Some(package) = &self.package {
            f.write_str(package)?;
        }
        if let Some(function) = &self.function {
            if self.package.is_some() {
                f.write_str(".")?;
            }
            f.write_str(function)?;
        }
        if has_scope && has_position {
            f.write_str("/")?;
        }
        if let Some(file) = &self.file {
            f.write_str(file)?;
        }
        if let Some(line) = self.line {
            if self.file.is_some() {
                f.write_str(":")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
