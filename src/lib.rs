//! Creator Cards host shell
//!
//! 创作者卡片宿主层：配置加载、日志初始化、依赖组装与命令行渲染。

pub mod bootstrap;
pub mod shell;

pub use bootstrap::{build_deck, init_tracing_subscriber, load_config, Deck};
pub use shell::{Cli, Command, ConsoleRenderer};
