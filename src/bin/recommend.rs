/**
 * critics
 * Copyright (C) 2018 The critics developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

extern crate critics;
extern crate getopts;
extern crate num_cpus;
extern crate serde_json;
extern crate tracing;
extern crate tracing_subscriber;

use std::env;
use std::error::Error;
use std::process;

use getopts::{Matches, Options as CliOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use critics::{batch, io, rank, recommend};
use critics::{Entity, Metric, Options, RatingStore};
use critics::types::UserRecommendations;

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = CliOptions::new();
    opts.optopt("i", "inputfile", "Input file name (required). The input consists of ratings of \
        items by users, either as a JSON object mapping users to objects mapping items to \
        ratings (files ending in .json), or as user, item and rating triples separated by tabs, \
        one per line.", "PATH");
    opts.optopt("o", "outputfile", "Output file name (optional, output will be written to stdout \
        by default).", "PATH");
    opts.optopt("c", "config", "JSON file with default settings (optional). Command line options \
        take precedence.", "PATH");
    opts.optopt("u", "user", "Only compute recommendations for this user (optional, defaults to \
        all users).", "NAME");
    opts.optopt("b", "based", "Predict from similar users or from similar items (optional, \
        defaults to user).", "user|item");
    opts.optopt("m", "metric", "Similarity metric used for prediction (optional, defaults to \
        euclidean).", "euclidean|pearson");
    opts.optopt("n", "top-n", "Number of items to recommend per user (optional, defaults to 0, \
        which recommends all unrated items).", "NUMBER");
    opts.optflag("", "no-debiasing", "Do not center ratings on the mean rating of users or items.");
    opts.optopt("s", "similar", "Print the entities most similar to this one instead of \
        recommending, the kind of entity is taken from --based and the metric from --metric.",
        "NAME");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    if !matches.opt_present("i") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify an inputfile via --inputfile."),
        );
    }

    let options = match options_from(&matches) {
        Ok(options) => options,
        Err(failure) => {
            let hint = format!("Problem with the options: {}", failure);
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let ratings_path = matches.opt_str("i").unwrap_or_default();
    let output_path = matches.opt_str("o");

    let outcome = match matches.opt_str("s") {
        Some(name) => print_similar(&ratings_path, &name, &options),
        None => compute_recommendations(&ratings_path, matches.opt_str("u"), &options, output_path),
    };

    if let Err(failure) = outcome {
        eprintln!("\n{}\n", failure);
        process::exit(1);
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: CliOptions,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
    process::exit(if hint.is_some() { 2 } else { 0 });
}

fn options_from(matches: &Matches) -> Result<Options, Box<dyn Error>> {

    let mut options = match matches.opt_str("c") {
        Some(path) => Options::from_json_file(&path)?,
        None => Options::default(),
    };

    if let Some(based) = matches.opt_str("b") {
        options.based = based.parse::<Entity>()?;
    }

    if let Some(metric) = matches.opt_str("m") {
        options.metric = metric.parse::<Metric>()?;
    }

    if let Some(top_n) = matches.opt_get::<usize>("n")? {
        options.top_n = top_n;
    }

    if matches.opt_present("no-debiasing") {
        options.debiasing = false;
    }

    Ok(options)
}

fn load(ratings_path: &str, options: &Options) -> Result<RatingStore, Box<dyn Error>> {
    info!("Reading ratings from {}", ratings_path);
    let ratings = io::read_ratings(ratings_path)?;
    Ok(RatingStore::new(ratings, options.missing_value))
}

fn print_similar(ratings_path: &str, name: &str, options: &Options) -> Result<(), Box<dyn Error>> {

    let store = load(ratings_path, options)?;
    let similar = rank::similar_entities_with(&store, options.based, name, options.metric)?;

    for scored in similar.iter() {
        println!("{}", serde_json::to_string(scored)?);
    }

    Ok(())
}

fn compute_recommendations(
    ratings_path: &str,
    user: Option<String>,
    options: &Options,
    output_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    let store = load(ratings_path, options)?;

    let recommendations = match user {
        Some(user) => {
            let recommended_items = recommend::get_recommendations(&store, &user, options)?;
            vec![UserRecommendations { for_user: user, recommended_items }]
        },
        None => {
            info!("Computing {}-based recommendations for all users", options.based);
            batch::recommend_all(&store, options, num_cpus::get())?
        },
    };

    info!("Writing recommendations...");
    io::write_recommendations(&recommendations, output_path)?;

    Ok(())
}
