use std::path::Path;

use cdkctx_core::ContextMap;
use serde_json::Value;

use crate::loader::ContextLoader;

/// Construction options for [`App`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppProps {
    pub context: ContextMap,
}

/// Application root that test suites build stacks under.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    context: ContextMap,
}

impl App {
    pub fn new(props: AppProps) -> Self {
        Self {
            context: props.context,
        }
    }

    pub fn try_get_context(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    pub fn context(&self) -> &ContextMap {
        &self.context
    }
}

/// Build the application root for a test suite living in `test_dir`.
///
/// Call once from the test entry point and pass the result down.
pub fn init_test_app(test_dir: &Path) -> cdkctx_core::Result<App> {
    let loaded = ContextLoader::from_test_dir(test_dir).load()?;
    Ok(App::new(AppProps {
        context: loaded.context,
    }))
}
