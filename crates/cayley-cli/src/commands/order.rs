use std::error::Error;

use clap::Args;

use super::GroupArgs;

#[derive(Args, Debug)]
pub struct OrderArgs {
    #[command(flatten)]
    pub group: GroupArgs,
    /// Print the order of this element instead of the group order.
    #[arg(long)]
    pub element: Option<String>,
}

pub fn run(args: &OrderArgs) -> Result<(), Box<dyn Error>> {
    let group = args.group.build()?;
    let Some(text) = &args.element else {
        println!("{}", group.order());
        return Ok(());
    };
    let word = group.word(text)?;
    let index = group.lookup(&word)?;
    match group.element_order(index) {
        Some(order) => println!("{}: {order}", group.render(&word)),
        None => return Err(format!("powers of {text} leave the element list").into()),
    }
    Ok(())
}
