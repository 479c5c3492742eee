// POS Navigation Shell - CLI
// Modes: interactive TUI preview (default), one-shot resolve, config audit.

use anyhow::{anyhow, Result};
use std::env;

use posnav::{
    BusinessType, ConfigValidator, NavigationResolver, PermissionTable, Role,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("resolve") => run_resolve(&args[2..])?,
        Some("validate") => run_validate()?,
        _ => run_ui_mode()?,
    }

    Ok(())
}

/// `posnav resolve <business> <role> [--json]`
fn run_resolve(args: &[String]) -> Result<()> {
    let (business_arg, role_arg) = match (args.first(), args.get(1)) {
        (Some(b), Some(r)) => (b, r),
        _ => {
            return Err(anyhow!(
                "usage: posnav resolve <business> <role> [--json]"
            ))
        }
    };

    let business = BusinessType::from_param(business_arg);
    let role: Role = role_arg
        .parse()
        .map_err(|e| anyhow!("{} (try: proprietor, manager, non-teaching, ...)", e))?;

    let resolver = validated_resolver()?;
    let nav = resolver.resolve(business, role);

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&nav)?);
        return Ok(());
    }

    println!(
        "🧭 Navigation for {} / {}",
        business.as_str(),
        role.as_str()
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", nav.home.label);

    for section in &nav.sections {
        println!("\n  [{}]", section.group);
        for entry in &section.entries {
            println!("    {} ({})", entry.label, entry.destination.as_str());
        }
    }

    if !nav.trailing.is_empty() {
        println!("\n  ─────────────");
        for entry in &nav.trailing {
            println!("  {} ({})", entry.label, entry.destination.as_str());
        }
    }

    Ok(())
}

/// `posnav validate` - run the configuration audit and report every defect.
fn run_validate() -> Result<()> {
    println!("📐 Auditing navigation configuration...");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let table = PermissionTable::new();
    let validator = ConfigValidator::new(&table);

    match validator.validate_all() {
        Ok(()) => {
            println!("✓ Group coverage");
            println!("✓ Permission coverage");
            println!("✓ Superuser invariant");
            println!("✓ Fixed entries");
            println!("\n✅ Configuration is sound");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("❌ {}", error);
            }
            Err(anyhow!("configuration audit failed: {} error(s)", errors.len()))
        }
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🖥️  Loading navigation shell preview...\n");

    let resolver = validated_resolver()?;

    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = posnav::ui::App::new(resolver);
    posnav::ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    Err(anyhow!(
        "built without the `tui` feature; use `posnav resolve <business> <role>`"
    ))
}

/// Build a resolver, refusing to serve a defective configuration.
fn validated_resolver() -> Result<NavigationResolver> {
    let table = PermissionTable::new();

    if let Err(errors) = ConfigValidator::new(&table).validate_all() {
        for error in &errors {
            eprintln!("❌ {}", error);
        }
        return Err(anyhow!(
            "configuration audit failed: {} error(s); run `posnav validate`",
            errors.len()
        ));
    }

    Ok(NavigationResolver::with_permissions(table))
}
