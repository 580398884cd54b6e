use anyhow::Result;
use problem_api_core::{can_write_json_problem, parse_accept, problem_for_status, render_plain_text};
use serde::Serialize;

pub(crate) fn run_problem(
    status: u16,
    detail: Option<String>,
    instance: Option<String>,
    plain: bool,
) -> Result<()> {
    let mut doc = problem_for_status(status)?;
    doc.detail = detail;
    doc.instance = instance;
    if plain {
        print!("{}", render_plain_text(&doc));
    } else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct NegotiationReport<'a> {
    accept: &'a str,
    media_types: Vec<&'a str>,
    json_problem: bool,
}

pub(crate) fn run_negotiate(accept: &str) -> Result<()> {
    let report = NegotiationReport {
        accept,
        media_types: parse_accept(Some(accept)),
        json_problem: can_write_json_problem(Some(accept)),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
