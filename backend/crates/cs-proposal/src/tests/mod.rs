mod parser;

/// Transcript shaped the way the three-stage pipeline usually answers.
pub(crate) const RECIPE_TRANSCRIPT: &str = "\
Plataforma de Receitas
Descrição:
Uma aplicação para compartilhar receitas.
Usuários podem avaliar pratos.
Objetivos:
- Aprender React
- Praticar Node
- Integrar banco de dados
1. Próximos passos
Tarefas:
- Configuração: criar o repositório
  e instalar dependências
- Backend: criar API REST
- Frontend: criar telas
- Deploy: publicar a aplicação
";

pub(crate) fn techs(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
