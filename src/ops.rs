//! Subcommand entry points. Every invocation is one linear
//! validate → load → mutate → persist → report pass; expected failures are
//! reported as plain messages and skip the operation without touching the
//! backing file.

use std::collections::BTreeMap;
use std::env;
use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::{
    Directive, NameError, Store, aliases_of, derive_name, emit_directive, resolve_dir,
    target_string, validate_name,
};

pub(crate) fn run_show(store: &Store, json: bool) -> Result<(), Box<dyn Error>> {
    let bookmarks = store.load()?;
    let sorted = listing_order(&bookmarks);

    if json {
        #[derive(Serialize)]
        struct Entry<'a> {
            name: &'a str,
            target: &'a str,
        }

        let entries: Vec<Entry> = sorted
            .iter()
            .map(|(name, target)| Entry {
                name: name.as_str(),
                target: target.as_str(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (name, target) in sorted {
        println!("{name} → {target}");
    }
    Ok(())
}

pub(crate) fn run_add(store: &Store, args: &[String], dry_run: bool) -> Result<(), Box<dyn Error>> {
    let Some((name, target)) = resolve_new_bookmark(args)? else {
        return Ok(());
    };

    match validate_name(&name) {
        Err(NameError::UnsupportedCharacters) => {
            println!(
                "Error: The chosen bookmark {name} contains unsupported characters. Allowed are alphanumeric characters, '-' and '_'."
            );
            return Ok(());
        }
        Err(NameError::IllegalFormat) => {
            println!(
                "Error: The chosen bookmark {name} is of illegal format. It must not start with '-' or consist only of numbers."
            );
            return Ok(());
        }
        Ok(()) => {}
    }

    if !Path::new(&target).is_dir() {
        println!("Hint: the directory {target} doesn't exist");
    }

    let mut bookmarks = store.load()?;
    if let Some(existing) = bookmarks.get(&name) {
        println!("Error: ~{name} already points to {existing}");
        return Ok(());
    }

    let aliases = aliases_of(&bookmarks, &target);
    if !aliases.is_empty() {
        let joined = aliases
            .iter()
            .map(|alias| format!("~{alias}"))
            .collect::<Vec<_>>()
            .join(" and ");
        println!("Hint: {joined} points to {target}, too");
    }

    if dry_run {
        println!("Dry run: would create the bookmark ~{name} for {target}");
        return Ok(());
    }

    bookmarks.insert(name.clone(), target.clone());
    store.save(&bookmarks)?;

    emit_directive(&Directive::Hash {
        name: name.clone(),
        target: target.clone(),
    });
    println!("Created the bookmark ~{name} for {target}");
    Ok(())
}

pub(crate) fn run_rm(store: &Store, names: &[String], dry_run: bool) -> Result<(), Box<dyn Error>> {
    // Each name is its own load-modify-persist cycle; a missing name skips
    // only itself.
    for name in names {
        let mut bookmarks = store.load()?;
        let Some(target) = bookmarks.remove(name) else {
            println!("There is no such bookmark: ~{name}");
            continue;
        };

        if dry_run {
            println!("Dry run: would remove the bookmark ~{name} for {target}");
            continue;
        }

        store.save(&bookmarks)?;
        emit_directive(&Directive::Unhash { name: name.clone() });
        println!("Removed the bookmark ~{name} for {target}");
    }
    Ok(())
}

/// Listing order: target path first, name second.
fn listing_order(bookmarks: &BTreeMap<String, String>) -> Vec<(&String, &String)> {
    let mut sorted: Vec<_> = bookmarks.iter().collect();
    sorted.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
    sorted
}

/// Work out the (name, target) pair from 0, 1, or 2 positional arguments.
/// A lone argument naming an existing directory is a target; any other lone
/// argument is a name for the current directory.
fn resolve_new_bookmark(args: &[String]) -> Result<Option<(String, String)>, Box<dyn Error>> {
    match args {
        [] => {
            let target = target_string(&resolve_dir(&env::current_dir()?)?);
            let name = derive_name(&target);
            Ok(Some((name, target)))
        }
        [single] => {
            let resolved = resolve_dir(Path::new(single))?;
            if resolved.is_dir() {
                let target = target_string(&resolved);
                let name = derive_name(&target);
                Ok(Some((name, target)))
            } else {
                let target = target_string(&resolve_dir(&env::current_dir()?)?);
                Ok(Some((single.clone(), target)))
            }
        }
        [name, target] => {
            let target = target_string(&resolve_dir(Path::new(target))?);
            Ok(Some((name.clone(), target)))
        }
        _ => {
            println!("Error: too many arguments");
            Ok(None)
        }
    }
}
