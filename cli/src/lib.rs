pub mod argparse;
pub mod commands;
