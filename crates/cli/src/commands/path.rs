//! Config file location command.

use foundry_config::ConfigResolver;

/// Print the config file that would be read; prints nothing when defaults apply.
pub fn run(resolver: &ConfigResolver) {
    if let Some(path) = resolver.config_file() {
        println!("{}", path.display());
    }
}
