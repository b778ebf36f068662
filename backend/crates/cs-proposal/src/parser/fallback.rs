use cs_core::{ProjectProposal, ProposalTask};

pub const DEFAULT_TITLE: &str = "Novo Projeto";
pub const MIN_GOALS: usize = 2;
pub const MAX_GOALS: usize = 5;
pub const MIN_TASKS: usize = 3;
pub const MAX_TASKS: usize = 8;

const FALLBACK_GOALS: [&str; 3] = [
    "Desenvolver um projeto completo e funcional",
    "Implementar todas as tecnologias solicitadas de forma coerente",
    "Seguir boas práticas de desenvolvimento",
];

const FALLBACK_TASKS: [(&str, &str); 5] = [
    (
        "Configuração do projeto",
        "Configurar ambiente de desenvolvimento e estrutura inicial.",
    ),
    (
        "Implementação básica",
        "Implementar as funcionalidades básicas do projeto.",
    ),
    (
        "Funcionalidades avançadas",
        "Adicionar recursos avançados e refinar o projeto.",
    ),
    (
        "Testes e documentação",
        "Adicionar testes e documentar o projeto.",
    ),
    (
        "Finalização",
        "Revisar o código, corrigir bugs e preparar para entrega.",
    ),
];

const COARSE_GOALS: [&str; 2] = [
    "Criar um projeto funcional",
    "Implementar as tecnologias solicitadas",
];

const COARSE_TASKS: [(&str, &str); 3] = [
    (
        "Configuração inicial",
        "Configure o ambiente de desenvolvimento",
    ),
    (
        "Desenvolvimento principal",
        "Implemente as funcionalidades principais",
    ),
    (
        "Finalização",
        "Finalize o projeto e prepare para entrega",
    ),
];

pub fn fallback_goals() -> Vec<String> {
    FALLBACK_GOALS.iter().map(|g| g.to_string()).collect()
}

pub fn fallback_tasks() -> Vec<ProposalTask> {
    to_tasks(&FALLBACK_TASKS)
}

pub fn fallback_description(technologies: &[String]) -> String {
    format!("Projeto utilizando {}", technologies.join(", "))
}

/// Replacement for a parse that blew up: built from the technology list only.
pub fn coarse_fallback(technologies: &[String]) -> ProjectProposal {
    let leading = technologies
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    ProjectProposal {
        title: format!("Projeto com {}", leading),
        description: format!(
            "Desenvolva um projeto utilizando {}.",
            technologies.join(", ")
        ),
        goals: COARSE_GOALS.iter().map(|g| g.to_string()).collect(),
        tasks: to_tasks(&COARSE_TASKS),
        technologies: technologies.to_vec(),
    }
}

fn to_tasks(entries: &[(&str, &str)]) -> Vec<ProposalTask> {
    entries
        .iter()
        .map(|(title, description)| ProposalTask::new(*title, *description))
        .collect()
}
