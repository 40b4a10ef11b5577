pub mod classify;
pub mod endpoints;
pub mod error;
pub mod mock;
pub mod model;
pub mod render;

pub use classify::classify;
pub use endpoints::EndpointTable;
pub use error::ConfigError;
pub use mock::generate_mock;
pub use model::{InputCategory, MapResult, Node};

pub fn print_banner() {
    println!(
        r#"
   __  ___ _         __
  /  |/  /(_)___  __/ /__ _  ___ ____
 / /|_/ // // _ \/ _  /  ' \/ _ `/ _ \
/_/  /_//_//_//_/\_,_/_/_/_/\_,_/ .__/
                               /_/    v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
