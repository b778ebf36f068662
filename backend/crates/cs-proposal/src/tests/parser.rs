use crate::parser::{DEFAULT_TITLE, fallback_goals, fallback_tasks};
use crate::tests::{RECIPE_TRANSCRIPT, techs};
use crate::{coarse_fallback, extract, normalize, parse};

use cs_core::ProposalTask;

use googletest::prelude::*;

// =========================================================================
// Full parse
// =========================================================================

#[test]
fn given_well_formed_transcript_when_parsed_then_all_fields_extracted() {
    // Given
    let technologies = techs(&["React", "Node"]);

    // When
    let proposal = parse(RECIPE_TRANSCRIPT, &technologies);

    // Then
    assert_that!(proposal.title, eq("Plataforma de Receitas"));
    assert_that!(
        proposal.description,
        eq("Uma aplicação para compartilhar receitas. Usuários podem avaliar pratos.")
    );
    assert_that!(
        proposal.goals,
        elements_are![
            eq("Aprender React"),
            eq("Praticar Node"),
            eq("Integrar banco de dados")
        ]
    );
    assert_that!(proposal.tasks, len(eq(4)));
    assert_that!(
        proposal.tasks[0],
        eq(&ProposalTask::new(
            "Configuração",
            "criar o repositório e instalar dependências"
        ))
    );
    assert_that!(
        proposal.tasks[3],
        eq(&ProposalTask::new("Deploy", "publicar a aplicação"))
    );
    assert_that!(proposal.technologies, eq(&technologies));
}

#[test]
fn given_empty_transcript_when_parsed_then_every_fallback_applies() {
    // When
    let proposal = parse("", &techs(&["Python"]));

    // Then
    assert_that!(proposal.title, eq(DEFAULT_TITLE));
    assert_that!(proposal.description, eq("Projeto utilizando Python"));
    assert_that!(proposal.goals, eq(&fallback_goals()));
    assert_that!(proposal.tasks, eq(&fallback_tasks()));
    assert_that!(proposal.technologies, elements_are![eq("Python")]);
}

#[test]
fn given_title_then_list_when_parsed_then_first_line_is_title() {
    let proposal = parse("My Cool Project\n- detail line\n", &[]);

    assert_that!(proposal.title, eq("My Cool Project"));
}

#[test]
fn given_headings_and_long_lines_when_parsed_then_they_are_skipped_for_title() {
    // Given
    let long_line = "x".repeat(100);
    let transcript = format!("# Heading\n- item\n\n{}\n  Real Title  \n", long_line);

    // When
    let proposal = parse(&transcript, &[]);

    // Then
    assert_that!(proposal.title, eq("Real Title"));
}

#[test]
fn given_no_goal_markers_when_parsed_then_goals_are_the_fixed_fallback() {
    let proposal = parse("Projeto X\nAlgo sem lista\n- solto\n", &techs(&["Go"]));

    assert_that!(proposal.goals, eq(&fallback_goals()));
    assert_that!(proposal.goals, len(eq(3)));
}

#[test]
fn given_no_description_marker_when_parsed_then_description_names_technologies() {
    let proposal = parse("Projeto X\n", &techs(&["React", "Node"]));

    assert_that!(proposal.description, eq("Projeto utilizando React, Node"));
}

#[test]
fn given_single_goal_when_parsed_then_goals_replaced_wholesale() {
    let proposal = parse("Objetivos:\n- Único objetivo real\n", &[]);

    assert_that!(proposal.goals, eq(&fallback_goals()));
}

#[test]
fn given_too_many_goals_when_parsed_then_capped_at_five() {
    // Given
    let transcript = "Goals:\n- a\n- b\n- c\n- d\n- e\n- f\n- g\n";

    // When
    let proposal = parse(transcript, &[]);

    // Then
    assert_that!(
        proposal.goals,
        elements_are![eq("a"), eq("b"), eq("c"), eq("d"), eq("e")]
    );
}

#[test]
fn given_too_many_tasks_when_parsed_then_capped_at_eight() {
    // Given
    let mut transcript = String::from("Tarefas:\n");
    for i in 1..=10 {
        transcript.push_str(&format!("- Step {}: do thing {}\n", i, i));
    }

    // When
    let proposal = parse(&transcript, &[]);

    // Then
    assert_that!(proposal.tasks, len(eq(8)));
    assert_that!(proposal.tasks[7].title, eq("Step 8"));
}

#[test]
fn given_two_tasks_when_parsed_then_tasks_replaced_wholesale() {
    let proposal = parse("Tarefas:\n- A: x\n- B: y\n", &[]);

    assert_that!(proposal.tasks, eq(&fallback_tasks()));
}

// =========================================================================
// Extraction stage
// =========================================================================

#[test]
fn given_task_line_with_colon_when_extracted_then_split_into_title_and_description() {
    let partial = extract("Plano\nTarefas:\n- Setup: configure the environment\n");

    assert_that!(
        partial.tasks,
        elements_are![eq(&ProposalTask::new("Setup", "configure the environment"))]
    );
}

#[test]
fn given_task_line_without_colon_when_extracted_then_description_is_empty() {
    let partial = extract("Tarefas\n- Escrever testes\n");

    assert_that!(
        partial.tasks,
        elements_are![eq(&ProposalTask::new("Escrever testes", ""))]
    );
}

#[test]
fn given_task_without_colon_then_continuation_when_extracted_then_description_keeps_leading_space() {
    let partial = extract("Tarefas\n- Escrever testes\ndetalhe extra\n");

    assert_that!(
        partial.tasks,
        elements_are![eq(&ProposalTask::new("Escrever testes", " detalhe extra"))]
    );
}

#[test]
fn given_task_prefixed_lines_in_block_when_extracted_then_they_only_reopen_block() {
    let partial = extract("Tarefas:\n- A: x\nTask 2: B\n- C: y\ntask notes\n");

    assert_that!(
        partial.tasks,
        elements_are![
            eq(&ProposalTask::new("A", "x")),
            eq(&ProposalTask::new("C", "y"))
        ]
    );
}

#[test]
fn given_prose_before_first_task_when_extracted_then_prose_is_dropped() {
    let partial = extract("Tarefas\nsegue a lista abaixo\n- A: x\n");

    assert_that!(partial.tasks, elements_are![eq(&ProposalTask::new("A", "x"))]);
}

#[test]
fn given_numbered_line_within_first_five_chars_when_extracted_then_starts_task() {
    let partial = extract("Tarefas\n  3 - Build: code it\nPasso 7 continua\n");

    assert_that!(
        partial.tasks,
        elements_are![eq(&ProposalTask::new("Build", "code it Passo 7 continua"))]
    );
}

#[test]
fn given_line_mentioning_task_inside_block_when_extracted_then_it_reopens_instead_of_starting_task()
 {
    let partial = extract("Tarefas:\nTarefa 1: Setup\n- Build: code\n");

    assert_that!(partial.tasks, elements_are![eq(&ProposalTask::new("Build", "code"))]);
}

#[test]
fn given_goals_separated_by_blank_lines_when_extracted_then_block_stays_open() {
    let partial = extract("Metas\n\n- A\n\n- B\n");

    assert_that!(partial.goals, elements_are![eq("A"), eq("B")]);
}

#[test]
fn given_goals_block_without_dash_items_when_extracted_then_no_goals() {
    let partial = extract("Objetivos\nAprender bastante\nCrescer\n");

    assert_that!(partial.goals, is_empty());
}

#[test]
fn given_description_block_ended_by_list_item_when_extracted_then_item_not_appended() {
    let partial = extract("Title\nDescription\nFirst line\n- bullet\nAfter bullet\n");

    assert_that!(partial.description_lines, elements_are![eq("First line")]);
}

// =========================================================================
// Normalization stage
// =========================================================================

#[test]
fn given_empty_partial_when_normalized_then_title_defaults() {
    let proposal = normalize(Default::default(), &techs(&["Rust"]));

    assert_that!(proposal.title, eq(DEFAULT_TITLE));
    assert_that!(proposal.description, eq("Projeto utilizando Rust"));
}

// =========================================================================
// Coarse fallback
// =========================================================================

#[test]
fn given_technologies_when_coarse_fallback_then_built_from_first_two() {
    // When
    let proposal = coarse_fallback(&techs(&["React", "Node", "Postgres"]));

    // Then
    assert_that!(proposal.title, eq("Projeto com React, Node"));
    assert_that!(
        proposal.description,
        eq("Desenvolva um projeto utilizando React, Node, Postgres.")
    );
    assert_that!(proposal.goals, len(eq(2)));
    assert_that!(proposal.tasks, len(eq(3)));
    assert_that!(proposal.tasks[0].title, eq("Configuração inicial"));
    assert_that!(proposal.technologies, len(eq(3)));
}
