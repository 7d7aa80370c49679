// tests/command_builder.rs

use std::path::PathBuf;

use clap::Parser;

use pullwrap::cli::CliArgs;
use pullwrap::config::{ConfigFile, RawConfigFile};
use pullwrap::fs::mock::MockFileSystem;
use pullwrap::invocation::{self, PullOptions};
use pullwrap_test_utils::builders::PullOptionsBuilder;

fn args_of(opts: &PullOptions) -> Vec<String> {
    invocation::build("/usr/bin/ansible-pull", opts)
        .args()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn fixed_arguments_come_first_in_order() {
    let opts = PullOptionsBuilder::new()
        .inventory("/etc/inv.sh")
        .destination("/srv/checkout")
        .url("git@example.com:ops/site.git")
        .branch("prod")
        .playbook("site.yml")
        .build();

    assert_eq!(
        args_of(&opts),
        vec![
            "--clean",
            "--force",
            "-i",
            "/etc/inv.sh",
            "-d",
            "/srv/checkout",
            "-U",
            "git@example.com:ops/site.git",
            "-C",
            "prod",
            "site.yml",
        ]
    );
}

#[test]
fn all_optional_flags_follow_the_playbook_in_order() {
    let opts = PullOptionsBuilder::new()
        .private_key("/root/.ssh/deploy")
        .verbosity(3)
        .accept_host_key()
        .wait(300)
        .tags("web,db")
        .skip_tags("slow")
        .build();

    let args = args_of(&opts);
    assert_eq!(
        &args[11..],
        &[
            "--private-key",
            "/root/.ssh/deploy",
            "-vvv",
            "--accept-host-key",
            "-s",
            "300",
            "-t",
            "web,db",
            "--skip-tags",
            "slow",
        ]
    );
}

#[test]
fn optional_flags_are_independent() {
    let opts = PullOptionsBuilder::new().wait(60).skip_tags("slow").build();

    let args = args_of(&opts);
    assert_eq!(&args[11..], &["-s", "60", "--skip-tags", "slow"]);
}

#[test]
fn verbosity_expands_to_repeated_v() {
    assert_eq!(args_of(&PullOptionsBuilder::new().verbosity(1).build())[11], "-v");
    assert_eq!(args_of(&PullOptionsBuilder::new().verbosity(4).build())[11], "-vvvv");
    assert_eq!(args_of(&PullOptionsBuilder::new().verbosity(0).build()).len(), 11);
}

#[test]
fn invocation_keeps_program_and_displays_command_line() {
    let inv = invocation::build("/opt/bin/ansible-pull", &PullOptionsBuilder::new().build());

    assert_eq!(inv.program(), PathBuf::from("/opt/bin/ansible-pull").as_path());
    let shown = inv.to_string();
    assert!(shown.starts_with("/opt/bin/ansible-pull --clean --force -i"));
    assert!(shown.ends_with("local.yml"));
}

#[test]
fn assemble_drops_missing_private_key_and_merges_config() {
    let fs = MockFileSystem::new();
    let cfg = ConfigFile::try_from(RawConfigFile::default()).unwrap();

    let args = CliArgs::parse_from([
        "pullwrap",
        "--url",
        "https://git.example.com/site.git",
        "--ssh-key",
        "/root/.ssh/missing",
        "--wait",
        "--no-strict-host-key-checking",
    ]);

    let opts = PullOptions::assemble(&args, &cfg, &fs);

    assert_eq!(opts.private_key, None);
    assert_eq!(opts.inventory, cfg.pull.inventory_script);
    assert_eq!(opts.destination, cfg.pull.destination);
    assert_eq!(opts.wait_interval, Some(cfg.pull.wait_interval));
    assert!(!opts.strict_host_key_checking);
    assert_eq!(opts.branch, "master");
    assert_eq!(opts.playbook, PathBuf::from("local.yml"));
}

#[test]
fn assemble_keeps_existing_private_key_and_cli_overrides() {
    let fs = MockFileSystem::new();
    fs.add_file("/root/.ssh/deploy", "KEY");
    let cfg = ConfigFile::try_from(RawConfigFile::default()).unwrap();

    let args = CliArgs::parse_from([
        "pullwrap",
        "--url",
        "https://git.example.com/site.git",
        "--ssh-key",
        "/root/.ssh/deploy",
        "--inventory",
        "/opt/inv.py",
        "--pull-verbosity",
        "2",
    ]);

    let opts = PullOptions::assemble(&args, &cfg, &fs);

    assert_eq!(opts.private_key, Some(PathBuf::from("/root/.ssh/deploy")));
    assert_eq!(opts.inventory, PathBuf::from("/opt/inv.py"));
    assert_eq!(opts.verbosity, 2);
    assert_eq!(opts.wait_interval, None);
    assert!(opts.strict_host_key_checking);
}
