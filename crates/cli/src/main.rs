use std::{fs, process};

use clap::Parser;
use curricheck_cli::{App, Command, Representation};
use curricheck_core::schedule::linear_extensions;
use curricheck_core::{
    classify, color_conflicts, Classification, Coloring, PrereqRelation, Roster,
};
use curricheck_core::{DenseRelation, PackedRelation};
use curricheck_testgen::generator::Curriculum;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Generate(args) => generate(args),
        Command::Analyze(args) => analyze(args),
    }
}

fn generate(args: &curricheck_cli::GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let curricula = curricheck_testgen::generator::generate_mult_curricula(
        args.n_plan,
        args.n_course,
        args.n_edge,
        args.n_student,
        args.n_enroll,
    );

    for curriculum in &curricula {
        let path = args.output_dir.join(format!("{}.json", curriculum.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, curriculum).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} curricula to {}",
        curricula.len(),
        args.output_dir.display()
    );
}

/// Everything the engine derives from one curriculum file.
struct Report {
    courses: usize,
    cyclic: bool,
    classification: Classification,
    orderings_found: usize,
    coloring: Coloring,
}

fn run_analysis<R: PrereqRelation>(curriculum: &Curriculum, orders_limit: usize) -> Report {
    let enrollment = curriculum.get_enrollment();

    let mut rel = R::default();
    // Courses with no edges still count toward the element set.
    rel.ensure_size(enrollment.len());
    for &(a, b) in curriculum.get_edges() {
        rel.add_prereq(a, b);
    }

    let courses = rel.size();
    let cyclic = rel.has_cycle();
    let classification = classify(&rel);
    let orderings_found = linear_extensions(&rel, courses, orders_limit).len();

    let roster = Roster::from_fn(enrollment.len(), |course| {
        enrollment[course].iter().copied().collect()
    });
    let coloring = color_conflicts(&roster);

    Report {
        courses,
        cyclic,
        classification,
        orderings_found,
        coloring,
    }
}

fn analyze(args: &curricheck_cli::AnalyzeArgs) {
    let mut any_cyclic = false;

    let mut entries: Vec<_> = fs::read_dir(&args.input_dir)
        .unwrap_or_else(|e| {
            eprintln!("Failed to read input directory: {e}");
            process::exit(1);
        })
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .collect();

    entries.sort_by_key(fs::DirEntry::path);

    if entries.is_empty() {
        eprintln!("No .json files found in {}", args.input_dir.display());
        process::exit(1);
    }

    for entry in entries {
        let path = entry.path();
        let filename = path.file_name().unwrap_or_default().to_string_lossy();

        let file = fs::File::open(&path).unwrap_or_else(|e| {
            eprintln!("Failed to open {filename}: {e}");
            process::exit(1);
        });

        let curriculum: Curriculum = serde_json::from_reader(file).unwrap_or_else(|e| {
            eprintln!("Failed to parse {filename}: {e}");
            process::exit(1);
        });

        let report = match args.representation {
            Representation::Dense => run_analysis::<DenseRelation>(&curriculum, args.orders_limit),
            Representation::Packed => {
                run_analysis::<PackedRelation>(&curriculum, args.orders_limit)
            }
        };

        any_cyclic |= report.cyclic;

        if args.json {
            let result = serde_json::json!({
                "file": filename,
                "courses": report.courses,
                "cyclic": report.cyclic,
                "classification": report.classification,
                "orderings_found": report.orderings_found,
                "orderings_limit": args.orders_limit,
                "conflict_groups": report.coloring.groups,
                "colors": report.coloring.colors,
            });
            println!("{}", serde_json::to_string(&result).unwrap());
        } else if report.cyclic {
            println!("{filename}: FAIL (prerequisite cycle)");
        } else {
            println!(
                "{filename}: OK ({} courses, {} ordering(s) within limit {}, {} exam slot(s))",
                report.courses, report.orderings_found, args.orders_limit, report.coloring.groups
            );
            if args.verbose {
                let c = report.classification;
                println!(
                    "  reflexive: {}, symmetric: {}, transitive: {}, antisymmetric: {}",
                    c.reflexive, c.symmetric, c.transitive, c.antisymmetric
                );
                println!(
                    "  equivalence relation: {}, partial order: {}",
                    c.equivalence, c.partial_order
                );
                println!("  slot colors: {:?}", report.coloring.colors);
            }
        }
    }

    if any_cyclic {
        process::exit(1);
    }
}
