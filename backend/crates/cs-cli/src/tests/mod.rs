
use sqlx::SqlitePool;
use tempfile::TempDir;

pub(crate) const TRANSCRIPT: &str = "\
Diário de Estudos
Descrição:
Um app para registrar sessões de estudo.
Objetivos:
- Praticar Rust
- Persistir dados
1. Próximos passos
Tarefas:
- Setup: criar o projeto
- Modelo: definir entidades
- CLI: expor comandos
";

/// File-backed pool in a throwaway directory; keep the `TempDir` alive.
pub(crate) async fn test_pool() -> (TempDir, SqlitePool) {
    let dir = TempDir::new().unwrap();
    let pool = cs_db::connect(&dir.path().join("test.db"), 1).await.unwrap();
    (dir, pool)
}
