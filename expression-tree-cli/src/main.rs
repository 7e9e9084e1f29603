use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use expression_tree::notation::lexer::tokenize;
use expression_tree::notation::{
    build_tree, convert_infix_to_postfix, render_all, tokens_to_spaced_string, Parenthesization,
};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Converts an infix expression to postfix and prints it in infix, prefix and postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to convert. Read from standard input when left out
    expression: Option<String>,

    /// Treat the expression as an already converted postfix sequence
    #[clap(long)]
    postfix: bool,

    /// Which operator children get parentheses in the infix rendering
    #[clap(long, value_enum, default_value = "minimal")]
    parenthesization: ParenthesizationArgument,

    /// Also draw the expression tree
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum ParenthesizationArgument {
    Minimal,
    Conservative,
}

impl From<ParenthesizationArgument> for Parenthesization {
    fn from(argument: ParenthesizationArgument) -> Self {
        match argument {
            ParenthesizationArgument::Minimal => Parenthesization::Minimal,
            ParenthesizationArgument::Conservative => Parenthesization::Conservative,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression(args.postfix)?,
    };

    let postfix = if args.postfix {
        tokenize(&expression)?
    } else {
        let postfix = convert_infix_to_postfix(&expression)?;
        println!("Postfix expression: {}", tokens_to_spaced_string(&postfix));
        postfix
    };

    let tree = build_tree(postfix).context("Could not build an expression tree")?;
    info!("Built expression tree for '{}'", expression.trim());
    if args.tree {
        print!("{}", tree);
    }

    let renderings = render_all(&tree, args.parenthesization.into());
    println!("Infix expression: {}", renderings.infix);
    println!("Prefix expression: {}", renderings.prefix);
    println!("Postfix expression: {}", renderings.postfix);
    Ok(())
}

fn read_expression(postfix: bool) -> Result<String> {
    let notation = if postfix { "postfix" } else { "infix" };
    print!("Enter the {} expression: ", notation);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Could not read expression from standard input")?;
    Ok(line)
}
