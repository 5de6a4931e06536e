use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use katalog::api::{CmdMessage, KatalogApi, MessageLevel};
use katalog::error::Result;
use katalog::model::{Category, Product};
use katalog::store::fs::FileStore;
use katalog::validate::{ProductForm, ValidationErrors};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, ProductFields};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: KatalogApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { row, fields }) => handle_edit(&mut ctx, row, fields),
        Some(Commands::Delete { row, yes }) => handle_delete(&mut ctx, row, yes),
        Some(Commands::Categories) => handle_categories(),
        Some(Commands::List) | None => handle_list(&mut ctx),
    }
}

fn init_context() -> Result<AppContext> {
    // KATALOG_HOME overrides the platform data dir (also how tests isolate).
    let data_dir = match std::env::var_os("KATALOG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "katalog", "katalog")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let store = FileStore::new(data_dir);
    Ok(AppContext {
        api: KatalogApi::new(store),
    })
}

fn handle_add(ctx: &mut AppContext, fields: ProductFields) -> Result<()> {
    let form = ProductForm {
        name: fields.name.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        price: fields.price.unwrap_or_default(),
        category: fields.category.unwrap_or_default(),
        release_date: fields.release_date.unwrap_or_default(),
        stock: fields.stock.unwrap_or_default(),
        is_active: !fields.inactive,
    };

    let result = ctx.api.create_product(&form)?;
    print_messages(&result.messages);
    print_field_errors(&result.field_errors);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    print_messages(&result.messages);
    print_products(&result.products);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, row: usize, fields: ProductFields) -> Result<()> {
    let listed = ctx.api.list_products()?;
    print_messages(&listed.messages);

    let Some(current) = row.checked_sub(1).and_then(|i| listed.products.get(i)) else {
        println!("{}", "Produk tidak ditemukan.".dimmed());
        return Ok(());
    };

    let form = merge_form(current, fields);
    let result = ctx.api.update_product(current.id, &form)?;
    print_messages(&result.messages);
    print_field_errors(&result.field_errors);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, row: usize, yes: bool) -> Result<()> {
    let listed = ctx.api.list_products()?;
    print_messages(&listed.messages);

    let Some(target) = row.checked_sub(1).and_then(|i| listed.products.get(i)) else {
        println!("{}", "Produk tidak ditemukan.".dimmed());
        return Ok(());
    };

    let result = ctx.api.delete_product(target.id, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories() -> Result<()> {
    for category in Category::ALL {
        println!("{:<12} {}", category.value(), category.label());
    }
    Ok(())
}

/// Fill unspecified edit flags from the current record, so `katalog edit 2
/// --stock 40` only changes the stock. The active switch is tri-state:
/// --active, --inactive, or keep.
fn merge_form(current: &Product, fields: ProductFields) -> ProductForm {
    let is_active = if fields.inactive {
        false
    } else if fields.active {
        true
    } else {
        current.is_active
    };

    ProductForm {
        name: fields.name.unwrap_or_else(|| current.name.clone()),
        description: fields.description.unwrap_or_else(|| current.description.clone()),
        price: fields.price.unwrap_or_else(|| current.price.to_string()),
        category: fields.category.unwrap_or_else(|| current.category.to_string()),
        release_date: fields
            .release_date
            .unwrap_or_else(|| current.release_date.to_string()),
        stock: fields.stock.unwrap_or_else(|| current.stock.to_string()),
        is_active,
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_field_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        println!("  {}: {}", field.to_string().red(), message);
    }
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("Belum ada data Produk.");
        return;
    }

    let headers = ["#", "Nama", "Kategori", "Harga", "Stok", "Aktif"];
    let rows: Vec<[String; 6]> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            [
                (i + 1).to_string(),
                p.name.clone(),
                p.category.label().to_string(),
                format_rupiah(p.price),
                p.stock.to_string(),
                (if p.is_active { "Ya" } else { "Tidak" }).to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad_cell(header, *width))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.width()));

    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad_cell(cell, *width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }
}

fn pad_cell(cell: &str, width: usize) -> String {
    format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width())))
}

/// "Rp 15.000" style: dots for thousands, comma for (rare) decimals.
fn format_rupiah(price: f64) -> String {
    let mut whole = price.trunc() as i64;
    let mut cents = (price.fract() * 100.0).round() as i64;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }

    let digits: Vec<char> = whole.to_string().chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    if cents == 0 {
        format!("Rp {}", grouped)
    } else {
        format!("Rp {},{:02}", grouped, cents)
    }
}
