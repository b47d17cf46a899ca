pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const SUPPORTED_VERSION: &str = "v1beta";
pub(crate) const ERROR_PREFIX: &str = "[argparse]";
