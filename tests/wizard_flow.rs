//! Wizard Flow Integration Tests
//!
//! Drives the state machine the way a front end would: edits on drafts,
//! commits on advance, navigation back and reset.

use approx::assert_relative_eq;
use land_value_estimator::wizard::{apply_command, CommandEffect, WizardCommand};
use land_value_estimator::{FactorKind, Factors, Inputs, Region, WizardStateMachine, WizardStep};

fn at_step(step: WizardStep) -> WizardStateMachine {
    let mut wizard = WizardStateMachine::new();
    while wizard.step() != step {
        assert!(wizard.advance());
    }
    wizard
}

#[test]
fn urban_half_acre_session() {
    let mut wizard = WizardStateMachine::new();
    assert!(!wizard.can_go_back());

    wizard.advance();
    wizard.set_location("123 Meadow Lane, Palo Alto, CA");
    wizard.set_region(Region::Urban);
    wizard.set_acres(0.5);
    wizard.advance();

    for (kind, value) in [
        (FactorKind::Soil, 1.2),
        (FactorKind::Access, 1.15),
        (FactorKind::Utilities, 1.2),
        (FactorKind::Zoning, 1.3),
    ] {
        wizard.set_factor(kind, value);
    }
    wizard.advance();

    assert_eq!(wizard.step(), WizardStep::Result);
    let summary = wizard.summary();
    assert_eq!(summary.estimate, 275_828);
    assert_eq!(summary.region_baseline, 250_000);
    assert_relative_eq!(summary.acres, 0.5);
    assert_relative_eq!(summary.multipliers.zoning, 1.3);
    assert_eq!(wizard.inputs().location, "123 Meadow Lane, Palo Alto, CA");
}

#[test]
fn advance_past_result_is_a_no_op() {
    let mut wizard = at_step(WizardStep::Result);
    let before = wizard.summary();
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Result);
    assert_eq!(wizard.summary(), before);
}

#[test]
fn back_walks_each_reverse_edge() {
    let mut wizard = at_step(WizardStep::Result);
    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Factors);
    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Location);
    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Intro);
    assert!(!wizard.back());
    assert_eq!(wizard.step(), WizardStep::Intro);
}

#[test]
fn factor_edits_need_advance_to_commit() {
    let mut wizard = at_step(WizardStep::Factors);
    wizard.set_factor(FactorKind::Soil, 0.8);
    assert_relative_eq!(wizard.factors().soil, 1.0);

    // Leaving backwards drops the draft
    wizard.back();
    wizard.advance();
    assert_relative_eq!(wizard.draft_factors().soil, 1.0);

    wizard.set_factor(FactorKind::Soil, 0.8);
    wizard.advance();
    assert_relative_eq!(wizard.factors().soil, 0.8);
}

#[test]
fn committed_values_survive_going_back() {
    let mut wizard = at_step(WizardStep::Location);
    wizard.set_region(Region::Rural);
    wizard.advance();
    wizard.back();

    assert_eq!(wizard.step(), WizardStep::Location);
    assert_eq!(wizard.draft_inputs().region, Region::Rural);
    assert_eq!(wizard.inputs().region, Region::Rural);
}

#[test]
fn factor_values_clamped_on_entry() {
    let mut wizard = at_step(WizardStep::Factors);
    assert_eq!(wizard.set_factor(FactorKind::Access, 5.0), Some(1.15));
    assert_eq!(wizard.set_factor(FactorKind::Zoning, 0.1), Some(0.8));
}

#[test]
fn acreage_stepper_policy() {
    let mut wizard = at_step(WizardStep::Location);
    wizard.set_acres(0.35);
    assert_eq!(wizard.decrement_acres(), Some(0.1));
    assert_eq!(wizard.increment_acres(), Some(1.1));
    assert_eq!(wizard.set_acres(0.0), Some(0.1));
    assert_eq!(wizard.set_acres(-3.0), Some(0.1));
}

#[test]
fn reset_from_every_step_is_idempotent() {
    for &step in WizardStep::all() {
        let mut wizard = at_step(step);
        if step == WizardStep::Factors {
            wizard.set_factor(FactorKind::Utilities, 0.9);
        }

        wizard.reset();
        let once = (wizard.step(), wizard.inputs().clone(), *wizard.factors());
        wizard.reset();
        let twice = (wizard.step(), wizard.inputs().clone(), *wizard.factors());

        assert_eq!(once, twice);
        assert_eq!(once.0, WizardStep::Intro);
        assert_eq!(once.1, Inputs::default());
        assert_eq!(once.2, Factors::default());
    }
}

#[test]
fn summary_computable_in_any_step() {
    for &step in WizardStep::all() {
        let wizard = at_step(step);
        assert_eq!(wizard.summary().estimate, 120_000);
    }
}

#[test]
fn scripted_commands() {
    let script = [
        "next",
        "location Lot 9",
        "region rural",
        "acres 100",
        "next",
        "soil 1.0",
        "next",
    ];

    let mut wizard = WizardStateMachine::new();
    for line in script {
        let command = WizardCommand::parse(line).unwrap();
        assert_eq!(apply_command(&mut wizard, &command), CommandEffect::Applied, "{}", line);
    }

    assert_eq!(wizard.step(), WizardStep::Result);
    assert_eq!(wizard.summary().estimate, 2_625_000);
    assert_eq!(wizard.inputs().location, "Lot 9");
}
