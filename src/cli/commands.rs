use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use console::{style, Emoji, Term};
use tracing::{info, warn};

use crate::{
    cli::{
        args::*,
        prompt::{Conversation, LinePrompt, Prompt, TerminalPrompt},
    },
    models::{
        catalog::{Catalog, ItemKind},
        payment::PaymentMethod,
        order::Receipt,
    },
    services::{Inventory, OrderBuilder, OrderError},
    utils::{
        formatting::{format_item_menu, format_menu_table, format_order_summary, format_stock_json, format_stock_table},
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static PIZZA: Emoji<'_, '_> = Emoji("🍕 ", "");

const CHOICE_PROMPT: &str = "Enter the number of your choice";

pub struct CliApp {
    config: Config,
    catalog: Catalog,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Catalog::default(),
        }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command.unwrap_or(Commands::Order) {
            Commands::Order => self.handle_order(args.format),
            Commands::Menu => self.handle_menu(),
            Commands::Stock => self.handle_stock(args.format),
        }
    }

    fn handle_order(&self, format: OutputFormat) -> Result<()> {
        let mut inventory = self.config.inventory();

        let receipts = if io::stdin().is_terminal() {
            let conversation = Conversation::new(TerminalPrompt::new(), Term::stdout(), false);
            OrderSession::new(&self.catalog, &mut inventory, conversation, format).run()?
        } else {
            let conversation = Conversation::new(LinePrompt::new(io::stdin().lock()), io::stdout().lock(), true);
            OrderSession::new(&self.catalog, &mut inventory, conversation, format).run()?
        };

        info!("Session closed after {} paid order(s)", receipts.len());
        Ok(())
    }

    fn handle_menu(&self) -> Result<()> {
        self.write_menu(&mut io::stdout().lock())
    }

    fn handle_stock(&self, format: OutputFormat) -> Result<()> {
        self.write_stock(&mut io::stdout().lock(), format)
    }

    fn write_menu<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{} {}", PIZZA, style("Menu").bold().cyan())?;
        writeln!(out, "{}", format_menu_table(&self.catalog))?;
        Ok(())
    }

    /// Opening stock as configured, before any order has been taken.
    fn write_stock<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        let snapshot = self.config.inventory().snapshot();
        match format {
            OutputFormat::Table => {
                writeln!(out, "{} {}", INFO, style("Opening stock").bold().cyan())?;
                writeln!(out, "{}", format_stock_table(&self.catalog, &snapshot))?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", format_stock_json(&snapshot).context("Failed to encode stock")?)?;
            }
        }
        Ok(())
    }
}

enum OrderOutcome {
    Paid(Receipt),
    Exit,
}

/// Drives the base -> toppings -> payment loop until the customer exits or
/// input runs out. Every order draws from the same inventory.
pub struct OrderSession<'a, P, W> {
    catalog: &'a Catalog,
    inventory: &'a mut Inventory,
    conversation: Conversation<P, W>,
    format: OutputFormat,
}

impl<'a, P: Prompt, W: Write> OrderSession<'a, P, W> {
    pub fn new(
        catalog: &'a Catalog,
        inventory: &'a mut Inventory,
        conversation: Conversation<P, W>,
        format: OutputFormat,
    ) -> Self {
        Self {
            catalog,
            inventory,
            conversation,
            format,
        }
    }

    /// Runs orders back to back and returns the receipts of the paid ones.
    pub fn run(mut self) -> Result<Vec<Receipt>> {
        self.conversation.say(format!("{}Welcome to the Pizza Restaurant!", PIZZA))?;

        let mut receipts = Vec::new();
        while let OrderOutcome::Paid(receipt) = self.take_order()? {
            receipts.push(receipt);
        }

        self.conversation.say("Goodbye!")?;
        Ok(receipts)
    }

    fn take_order(&mut self) -> Result<OrderOutcome> {
        let catalog = self.catalog;
        let conversation = &mut self.conversation;
        let mut order = OrderBuilder::new(catalog, &mut *self.inventory);

        loop {
            conversation.say("\nChoose your base pizza:")?;
            conversation.say(format_item_menu(catalog, ItemKind::Base, ("0", "To exit")).trim_end())?;

            let choice = match conversation.ask(CHOICE_PROMPT)? {
                Some(choice) if choice != "0" => choice,
                _ => {
                    order.cancel()?;
                    return Ok(OrderOutcome::Exit);
                }
            };

            let Some(base) = catalog.base_by_key(&choice) else {
                conversation.say(format!("{}Invalid pizza choice!", CROSS))?;
                continue;
            };

            match order.select_base(&base.id) {
                Ok(_) => break,
                Err(OrderError::Unavailable { .. }) => {
                    conversation.say(format!("{}Pizza unavailable or out of stock!", WARNING))?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        loop {
            conversation.say("\nAvailable toppings:")?;
            conversation.say(format_item_menu(catalog, ItemKind::Topping, ("4", "Finish order")).trim_end())?;

            let Some(choice) = conversation.ask(CHOICE_PROMPT)? else {
                warn!("Input ended while adding toppings; order abandoned");
                return Ok(OrderOutcome::Exit);
            };
            if choice == "4" {
                break;
            }

            let Some(topping) = catalog.topping_by_key(&choice) else {
                conversation.say(format!("{}Invalid topping choice!", CROSS))?;
                continue;
            };

            match order.add_topping(&topping.id) {
                Ok(pizza) => {
                    let line = format!("{}Added {}. Current total: {}", CHECKMARK, topping.name, pizza.cost());
                    conversation.say(line)?;
                }
                Err(OrderError::Unavailable { .. }) => {
                    conversation.say(format!("{}Topping unavailable or out of stock!", WARNING))?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let summary = format_order_summary(order.finish()?);
        conversation.say("\nYour order:")?;
        conversation.say(summary.trim_end())?;

        let method = loop {
            conversation.say("\nChoose a payment method:")?;
            for method in PaymentMethod::ALL {
                conversation.say(format!("{}. {}", method.key(), method))?;
            }

            let Some(choice) = conversation.ask(CHOICE_PROMPT)? else {
                warn!("Input ended before payment; order abandoned");
                return Ok(OrderOutcome::Exit);
            };

            match PaymentMethod::from_key(&choice) {
                Some(method) => break method,
                None => conversation.say(format!("{}Invalid payment method!", CROSS))?,
            }
        };

        let receipt = order.pay(method)?;
        conversation.say(format!("{}{}", CHECKMARK, style(receipt.confirmation()).green()))?;
        match self.format {
            OutputFormat::Table => {
                let line = format!("Order {} at {}", receipt.id, receipt.paid_at.format("%Y-%m-%d %H:%M:%S UTC"));
                conversation.say(style(line).dim())?;
            }
            OutputFormat::Json => {
                conversation.say(serde_json::to_string_pretty(&receipt).context("Failed to encode receipt")?)?;
            }
        }

        self.print_inventory()?;
        Ok(OrderOutcome::Paid(receipt))
    }

    fn print_inventory(&mut self) -> Result<()> {
        let snapshot = self.inventory.snapshot();
        self.conversation.say("\nRemaining Inventory:")?;
        match self.format {
            OutputFormat::Table => self.conversation.say(format_stock_table(self.catalog, &snapshot)),
            OutputFormat::Json => {
                let json = format_stock_json(&snapshot).context("Failed to encode inventory")?;
                self.conversation.say(json)
            }
        }
    }
}
