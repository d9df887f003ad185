//! CLI command handlers
//!
//! Each handler parses its positional arguments, runs the corresponding
//! engine query, and renders the outcome. `--json` switches any command
//! to serialized output.

use relnorm::{
    is_lossless, minify, parse_attrs, preserves_fds, render_attrs, Relation, Result,
};

pub fn print_usage() {
    println!(
        r#"
relnorm - Relational schema normalization analysis

USAGE:
    relnorm <COMMAND> [OPTIONS]

COMMANDS:
    closure <relation> <attrs>            Attribute-set closure
    keys <relation>                       Candidate keys and prime attributes
    nf <relation>                         2NF/3NF/BCNF classification
    minify <relation>                     Minimal cover with elimination trace
    lossless <relation> <decomposition>   Lossless-join tableau chase
    preserve <relation> <decomposition>   Dependency-preservation check
    version                               Print version
    help                                  Show this help

NOTATION:
    A relation is a comma-separated list of tokens: "AB->C" declares a
    dependency (one attribute per character); a token without "->"
    declares bare attributes. A decomposition lists member relations
    separated by "/", e.g. "AD/AB/BE/CDE/AE".

OPTIONS:
    --json    Emit the full result as JSON

EXAMPLES:
    relnorm closure "A->B,B->C" A
    relnorm keys "B->C,B->E,C->B,C->D,A"
    relnorm minify "A->D,B->D,BD->CA,CD->B"
    relnorm lossless "A->C,B->C,C->D,CE->A,DE->C" "AD/AB/BE/CDE/AE"
"#
    );
}

fn json_flag(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--json")
}

fn positionals(args: &[String]) -> Vec<&str> {
    args.iter()
        .filter(|arg| !arg.starts_with("--"))
        .map(|arg| arg.as_str())
        .collect()
}

fn parse_decomposition(text: &str) -> Result<Vec<Relation>> {
    text.split('/').map(Relation::parse).collect()
}

pub fn cmd_closure(args: &[String]) -> Result<()> {
    let pos = positionals(args);
    if pos.len() != 2 {
        return Err("Usage: relnorm closure <relation> <attrs>".into());
    }
    let relation = Relation::parse(pos[0])?;
    let attrs = parse_attrs(pos[1]);
    let closure = relation.property_closure(&attrs);
    if json_flag(args) {
        println!("{}", serde_json::to_string_pretty(&closure)?);
    } else {
        println!(
            "{{{}}}+ = {{{}}}",
            render_attrs(&attrs),
            render_attrs(&closure)
        );
    }
    Ok(())
}

pub fn cmd_keys(args: &[String]) -> Result<()> {
    let pos = positionals(args);
    if pos.len() != 1 {
        return Err("Usage: relnorm keys <relation>".into());
    }
    let relation = Relation::parse(pos[0])?;
    let keys = relation.candidate_keys();
    if json_flag(args) {
        println!("{}", serde_json::to_string_pretty(&keys)?);
    } else {
        for key in &keys {
            println!("key: {{{}}}", render_attrs(key));
        }
        println!(
            "prime attributes: {{{}}}",
            render_attrs(&relation.key_attributes())
        );
    }
    Ok(())
}

pub fn cmd_nf(args: &[String]) -> Result<()> {
    let pos = positionals(args);
    if pos.len() != 1 {
        return Err("Usage: relnorm nf <relation>".into());
    }
    let relation = Relation::parse(pos[0])?;
    let (second, third, bcnf) = (relation.second_nf(), relation.third_nf(), relation.bcnf());
    if json_flag(args) {
        let report = serde_json::json!({
            "second_nf": second,
            "third_nf": third,
            "bcnf": bcnf,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("2NF:  {second}");
        println!("3NF:  {third}");
        println!("BCNF: {bcnf}");
    }
    Ok(())
}

pub fn cmd_minify(args: &[String]) -> Result<()> {
    let pos = positionals(args);
    if pos.len() != 1 {
        return Err("Usage: relnorm minify <relation>".into());
    }
    let relation = Relation::parse(pos[0])?;
    let cover = minify(&relation);
    if json_flag(args) {
        println!("{}", serde_json::to_string_pretty(&cover)?);
    } else {
        for step in &cover.eliminate_property {
            println!(
                "{} - {}: closure {{{}}} -> {}",
                step.fd,
                step.attribute,
                render_attrs(&step.closure),
                if step.eliminated { "eliminated" } else { "kept" }
            );
        }
        for step in &cover.eliminate_fd {
            println!(
                "{}: closure {{{}}} -> {}",
                step.fd,
                render_attrs(&step.closure),
                if step.eliminated { "eliminated" } else { "kept" }
            );
        }
        println!("Fmin = {}", cover.result);
    }
    Ok(())
}

pub fn cmd_lossless(args: &[String]) -> Result<()> {
    let pos = positionals(args);
    if pos.len() != 2 {
        return Err("Usage: relnorm lossless <relation> <decomposition>".into());
    }
    let relation = Relation::parse(pos[0])?;
    let decomposition = parse_decomposition(pos[1])?;
    let check = is_lossless(&decomposition, &relation);
    if json_flag(args) {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else {
        println!("{}", check.initial);
        for step in &check.steps {
            println!("apply {}:", step.fd);
            println!("{}", step.tableau);
        }
        println!("lossless: {}", check.lossless);
    }
    Ok(())
}

pub fn cmd_preserve(args: &[String]) -> Result<()> {
    let pos = positionals(args);
    if pos.len() != 2 {
        return Err("Usage: relnorm preserve <relation> <decomposition>".into());
    }
    let relation = Relation::parse(pos[0])?;
    let decomposition = parse_decomposition(pos[1])?;
    let check = preserves_fds(&decomposition, &relation);
    if json_flag(args) {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else {
        match &check.failed_on {
            Some(fd) => println!("not preserved, fails on {fd}"),
            None => println!("preserved"),
        }
    }
    Ok(())
}
