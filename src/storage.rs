//! # Almacenamiento de Archivos
//! src/storage.rs
//!
//! Colaborador de archivos para las rutas `/files/`. Los handlers no
//! tocan el filesystem directamente: piden leer o escribir un nombre de
//! archivo y este módulo lo resuelve bajo el directorio base
//! (`--directory`).
//!
//! No hay sincronización entre conexiones: dos escrituras concurrentes
//! al mismo nombre quedan en last-writer-wins.

use std::io;
use std::path::PathBuf;

/// Acceso a archivos bajo un directorio base
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Crea un store sobre el directorio base dado
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resuelve un nombre de archivo a su ruta bajo el directorio base
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::storage::FileStore;
    /// use std::path::Path;
    ///
    /// let store = FileStore::new("/tmp/datos");
    /// assert_eq!(store.resolve("a.txt"), Path::new("/tmp/datos/a.txt"));
    /// ```
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Lee el contenido completo de un archivo
    ///
    /// Cualquier fallo (inexistente, permisos, I/O) retorna el error tal
    /// cual; el handler no distingue entre causas.
    pub async fn read(&self, filename: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.resolve(filename)).await
    }

    /// Escribe el contenido verbatim en un archivo
    ///
    /// Crea el archivo si no existe y lo trunca si existe.
    pub async fn write(&self, filename: &str, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(self.resolve(filename), contents).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: directorio temporal propio de cada test
    async fn temp_store(label: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!("http11-storage-{}-{}", label, std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        FileStore::new(dir)
    }

    #[test]
    fn test_resolve_une_base_y_nombre() {
        let store = FileStore::new("/base/datos");
        assert_eq!(store.resolve("a.txt"), PathBuf::from("/base/datos/a.txt"));
    }

    #[tokio::test]
    async fn test_write_luego_read() {
        let store = temp_store("roundtrip").await;

        store.write("consistencia.txt", b"hello").await.unwrap();
        let contents = store.read("consistencia.txt").await.unwrap();

        assert_eq!(contents, b"hello");
    }

    #[tokio::test]
    async fn test_write_trunca_contenido_previo() {
        let store = temp_store("truncate").await;

        store.write("sobre.txt", b"contenido largo inicial").await.unwrap();
        store.write("sobre.txt", b"corto").await.unwrap();

        assert_eq!(store.read("sobre.txt").await.unwrap(), b"corto");
    }

    #[tokio::test]
    async fn test_read_inexistente_falla() {
        let store = temp_store("missing").await;

        let result = store.read("no-existe.txt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_write_en_directorio_inexistente_falla() {
        let store = FileStore::new("/ruta/que/no/existe/jamas");

        let result = store.write("x.txt", b"datos").await;
        assert!(result.is_err());
    }
}
