use std::io::{self, BufRead};

use demopad::app::{AppController, AppEvent, DemoPanel};
use demopad::domain::cart::{CartIntent, Product, ProductId};
use demopad::domain::theme::Theme;
use demopad::domain::todo::TodoIntent;
use demopad::input::intent_for_key;
use demopad::platform::{EnvPreference, FileStorage};
use demopad::ui::StyleRegistry;

const PREFS_FILE: &str = "demopad.prefs.json";

/// Demo catalog for the cart panel, prices in cents
fn catalog() -> Vec<Product> {
    vec![
        product(1, "Phone", 599900),
        product(2, "Laptop", 1299900),
        product(3, "Earbuds", 199900),
        product(4, "Tablet", 459900),
        product(5, "Watch", 299900),
    ]
}

fn product(id: u32, name: &str, unit_price: u64) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        unit_price,
    }
}

fn main() {
    let mut controller = AppController::new(
        FileStorage::new(PREFS_FILE),
        &EnvPreference::new(),
        StyleRegistry::new(),
    );

    println!("demopad ({} theme)", controller.theme());
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if !dispatch(&mut controller, line.trim()) {
            break;
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  calc <keys>         feed keypad characters, e.g. calc 5+3-2=");
    println!("  todo add <text> | todo toggle <n> | todo del <n> | todo clear | todo");
    println!("  cart add <n> | cart qty <n> <count> | cart rm <n> | cart");
    println!("  panel calc|todos|cart");
    println!("  theme | theme toggle | theme light | theme dark | css");
    println!("  help | quit");
}

fn dispatch(controller: &mut AppController<FileStorage, StyleRegistry>, input: &str) -> bool {
    let (command, rest) = match input.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "quit" | "exit" => return false,
        "help" => print_help(),
        "calc" => run_calc(controller, rest),
        "todo" => run_todo(controller, rest),
        "cart" => run_cart(controller, rest),
        "panel" => run_panel(controller, rest),
        "theme" => run_theme(controller, rest),
        "css" => println!("{}", controller.styles().to_css()),
        "" => {}
        _ => println!("unknown command '{command}', try 'help'"),
    }

    true
}

fn run_calc(controller: &mut AppController<FileStorage, StyleRegistry>, keys: &str) {
    for key in keys.chars() {
        match intent_for_key(key) {
            Some(intent) => controller.handle(AppEvent::Calculator(intent)),
            None => println!("ignoring key '{key}'"),
        }
    }
    let state = controller.calculator();
    match (state.pending(), state.operation()) {
        (Some(pending), Some(op)) => {
            println!("display: {}   ({pending} {} ...)", state.display(), op.symbol())
        }
        _ => println!("display: {}", state.display()),
    }
}

fn run_todo(controller: &mut AppController<FileStorage, StyleRegistry>, args: &str) {
    let (action, rest) = match args.split_once(' ') {
        Some((action, rest)) => (action, rest.trim()),
        None => (args, ""),
    };

    match action {
        "add" => controller.handle(AppEvent::Todos(TodoIntent::Add(rest.to_string()))),
        "toggle" | "del" => {
            let Some(item) = rest
                .parse::<usize>()
                .ok()
                .and_then(|index| controller.todos().all().get(index))
            else {
                println!("no todo at index '{rest}'");
                return;
            };
            let id = item.id();
            let intent = if action == "toggle" {
                TodoIntent::Toggle(id)
            } else {
                TodoIntent::Delete(id)
            };
            controller.handle(AppEvent::Todos(intent));
        }
        "clear" => controller.handle(AppEvent::Todos(TodoIntent::ClearCompleted)),
        "" => {}
        _ => {
            println!("unknown todo action '{action}'");
            return;
        }
    }

    let todos = controller.todos();
    for (index, item) in todos.all().iter().enumerate() {
        let mark = if item.is_completed() { 'x' } else { ' ' };
        println!("  {index}. [{mark}] {}", item.text());
    }
    println!(
        "{} total, {} active, {} completed",
        todos.len(),
        todos.active_count(),
        todos.completed_count()
    );
}

fn run_cart(controller: &mut AppController<FileStorage, StyleRegistry>, args: &str) {
    let mut parts = args.split_whitespace();
    let action = parts.next().unwrap_or("");
    let id = parts.next().and_then(|raw| raw.parse::<u32>().ok());

    match (action, id) {
        ("add", Some(id)) => {
            match catalog().into_iter().find(|product| product.id == ProductId(id)) {
                Some(product) => controller.handle(AppEvent::Cart(CartIntent::AddProduct(product))),
                None => println!("no product {id} in the catalog"),
            }
        }
        ("qty", Some(id)) => match parts.next().and_then(|raw| raw.parse::<u32>().ok()) {
            Some(count) => {
                controller.handle(AppEvent::Cart(CartIntent::SetQuantity(ProductId(id), count)))
            }
            None => println!("usage: cart qty <n> <count>"),
        },
        ("rm", Some(id)) => controller.handle(AppEvent::Cart(CartIntent::Remove(ProductId(id)))),
        ("", None) => {}
        _ => {
            println!("unknown cart action '{args}'");
            return;
        }
    }

    let cart = controller.cart();
    for line in cart.lines() {
        println!(
            "  {} × {} @ {} = {}",
            line.quantity(),
            line.product().name,
            format_price(line.product().unit_price),
            format_price(line.line_total())
        );
    }
    println!(
        "{} items, total {}",
        cart.total_items(),
        format_price(cart.total_price())
    );
}

fn run_panel(controller: &mut AppController<FileStorage, StyleRegistry>, name: &str) {
    let panel = match name {
        "calc" => DemoPanel::Calculator,
        "todos" => DemoPanel::Todos,
        "cart" => DemoPanel::Cart,
        _ => {
            println!("unknown panel '{name}'");
            return;
        }
    };
    controller.handle(AppEvent::SwitchPanel(panel));
    println!("panel: {}", controller.panel().title());
}

fn run_theme(controller: &mut AppController<FileStorage, StyleRegistry>, action: &str) {
    match action {
        "" => {}
        "toggle" => controller.handle(AppEvent::ToggleTheme),
        name => match Theme::from_name(name) {
            Some(theme) => controller.handle(AppEvent::SetTheme(theme)),
            None => {
                println!("unknown theme '{name}'");
                return;
            }
        },
    }
    println!("theme: {}", controller.theme());
}

fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
