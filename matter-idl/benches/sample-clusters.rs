use divan::black_box;
use matter_idl::idl::Idl;
use miette::GraphicalReportHandler;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

// Benchmark parsing sample-clusters.matter
#[divan::bench]
fn parse_sample_clusters() {
    if let Err(e) = Idl::parse(black_box(matter_idl::SAMPLE_CLUSTERS_IDL.into())) {
        let mut buf = String::new();
        GraphicalReportHandler::new()
            .render_report(&mut buf, &e)
            .unwrap();
        eprintln!("\n{}", buf);
    }
}
