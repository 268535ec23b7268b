use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_tree::interpreter::parse_expression;
use log::info;

/// Evaluates an arithmetic expression and prints it in postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The infix expression to evaluate
    #[clap(default_value = "32 * 3 + 2 / 5 ^    7")]
    expression: String,

    /// Also draw the expression tree
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    info!("Parsing {:?}", args.expression);
    let tree = parse_expression(&args.expression)
        .with_context(|| format!("could not parse expression {:?}", args.expression))?;
    let value = tree
        .eval()
        .with_context(|| "could not evaluate expression".to_string())?;

    println!("{}", value);
    println!("{}", tree);
    if args.tree {
        if let Some(root) = tree.root() {
            print!("{}", root);
        }
    }
    Ok(())
}
