use std::sync::Arc;

use thiserror::Error;

use super::traits::ContentHandler;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("handler '{0}' is not registered")]
    NotFound(String),
    #[error("handler '{0}' does not expose an analyze capability")]
    MissingAnalyze(String),
}

/// One statically registered handler module.
///
/// Models a loadable unit: the module can be present in the build without
/// exporting the analyze entry point, which resolution reports as a contract
/// violation instead of a reflection failure at call time.
pub struct HandlerModule {
    pub name: &'static str,
    pub analyzer: Option<fn() -> Arc<dyn ContentHandler>>,
}

/// Resolves handler identifiers into callable capabilities.
///
/// Identifiers are configuration data, not compiled-in references: supporting
/// a new file type means one configuration mapping plus one module table
/// entry, with the request pipeline untouched.
pub struct HandlerResolver {
    modules: Vec<HandlerModule>,
}

impl HandlerResolver {
    pub fn new(modules: Vec<HandlerModule>) -> Self {
        Self { modules }
    }

    /// Resolver over the built-in module table.
    pub fn with_builtins() -> Self {
        Self::new(super::builtin::modules())
    }

    pub fn resolve(&self, handler_id: &str) -> Result<Arc<dyn ContentHandler>, ResolveError> {
        let module = self
            .modules
            .iter()
            .find(|module| module.name == handler_id)
            .ok_or_else(|| ResolveError::NotFound(handler_id.to_string()))?;

        let analyzer = module
            .analyzer
            .ok_or_else(|| ResolveError::MissingAnalyze(handler_id.to_string()))?;

        Ok(analyzer())
    }

    /// Resolves every identifier up front so a missing or broken handler
    /// fails startup instead of surfacing as a 500 on first use.
    pub fn resolve_all<'a, I>(&self, handler_ids: I) -> Result<(), ResolveError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for handler_id in handler_ids {
            self.resolve(handler_id)?;
        }
        Ok(())
    }
}
