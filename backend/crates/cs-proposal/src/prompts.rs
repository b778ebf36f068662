//! Stage prompts for the proposal pipeline.
//!
//! The pipeline runs three agents in order: project definition, technology
//! analysis and task breakdown. The last stage builds on the output of the
//! first two.

use cs_core::ProposalRequest;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    ProjectDefinition,
    TechnologyAnalysis,
    TaskBreakdown,
}

impl PipelineStage {
    /// Stages whose output this stage consumes
    pub fn depends_on(&self) -> &'static [PipelineStage] {
        match self {
            Self::ProjectDefinition | Self::TechnologyAnalysis => &[],
            Self::TaskBreakdown => &[Self::ProjectDefinition, Self::TechnologyAnalysis],
        }
    }
}

/// Who answers a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentPersona {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagePrompt {
    pub stage: PipelineStage,
    #[serde(flatten)]
    pub persona: AgentPersona,
    pub description: String,
    pub depends_on: &'static [PipelineStage],
}

const PROJECT_MANAGER: AgentPersona = AgentPersona {
    role: "Gerente de Projeto",
    goal: "Coordenar e garantir que o projeto seja bem definido, prático e desafiador",
    backstory: "Você é um experiente gerente de projetos de software com anos de experiência \
em desenvolvimento de produtos digitais. Sua função é garantir que o projeto seja \
bem estruturado, com escopo definido e metas claras.",
};

const TECH_SPECIALIST: AgentPersona = AgentPersona {
    role: "Especialista em Tecnologia",
    goal: "Garantir que as tecnologias solicitadas sejam utilizadas de forma eficiente e coerente",
    backstory: "Você é um desenvolvedor especialista com profundo conhecimento nas tecnologias \
solicitadas. Sua função é garantir que as tecnologias sejam aplicadas de forma adequada, \
seguindo boas práticas e padrões modernos de desenvolvimento.",
};

const TASK_DESIGNER: AgentPersona = AgentPersona {
    role: "Designer de Tarefas",
    goal: "Criar um conjunto de tarefas claras e progressivas para o desenvolvimento do projeto",
    backstory: "Você é especializado em quebrar projetos complexos em tarefas menores e gerenciáveis. \
Sua função é criar uma sequência de tarefas que guie o desenvolvedor do básico até a \
conclusão do projeto completo.",
};

/// Assemble the three stage prompts for a request, in execution order.
pub fn build_stage_prompts(request: &ProposalRequest) -> Vec<StagePrompt> {
    let tech_str = request.technologies_label();

    vec![
        stage_prompt(
            PipelineStage::ProjectDefinition,
            PROJECT_MANAGER,
            project_definition(request, &tech_str),
        ),
        stage_prompt(
            PipelineStage::TechnologyAnalysis,
            TECH_SPECIALIST,
            technology_analysis(&tech_str),
        ),
        stage_prompt(
            PipelineStage::TaskBreakdown,
            TASK_DESIGNER,
            task_breakdown(),
        ),
    ]
}

fn stage_prompt(stage: PipelineStage, persona: AgentPersona, description: String) -> StagePrompt {
    StagePrompt {
        stage,
        persona,
        description,
        depends_on: stage.depends_on(),
    }
}

fn project_definition(request: &ProposalRequest, tech_str: &str) -> String {
    let additional = request
        .additional_info
        .as_deref()
        .filter(|info| !info.trim().is_empty())
        .map(|info| format!("Informações adicionais: {}\n", info))
        .unwrap_or_default();

    format!(
        "Crie uma proposta de projeto {project_type} utilizando as seguintes tecnologias: {tech_str}.\n\
{additional}\n\
O projeto deve ser:\n\
1. Desafiador mas realizável\n\
2. Aplicável ao mundo real\n\
3. Focado nas tecnologias solicitadas\n\
\n\
Entregue:\n\
- Um título atraente para o projeto\n\
- Uma descrição detalhada\n\
- 3-5 objetivos principais\n",
        project_type = request.project_type.label(),
    )
}

fn technology_analysis(tech_str: &str) -> String {
    format!(
        "Analise as tecnologias solicitadas ({tech_str}) e estruture como elas serão utilizadas no projeto.\n\
\n\
Considere:\n\
1. Como as tecnologias se relacionam entre si\n\
2. Quais são as funcionalidades chave que poderão ser implementadas\n\
3. Arquitetura geral do sistema\n\
\n\
Entregue:\n\
- Uma lista final das tecnologias principais e complementares necessárias\n\
- Recomendações técnicas para a implementação\n"
    )
}

fn task_breakdown() -> String {
    "Com base na definição do projeto e na análise tecnológica, crie uma sequência de 5-8 tarefas \
de desenvolvimento para guiar o usuário a construir este projeto.\n\
\n\
Cada tarefa deve:\n\
1. Ter um título claro\n\
2. Incluir uma descrição detalhada do que deve ser feito\n\
3. Ser sequencial e progressiva\n\
\n\
As tarefas devem começar do básico (configuração, estrutura) e evoluir até os \
recursos mais complexos do projeto.\n"
        .to_string()
}
