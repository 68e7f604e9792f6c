//! 画面表示用の固定文言

pub const APP_TITLE: &str = "Sistema de Percepción Emocional Infantil";
pub const APP_SUBTITLE: &str =
    "Análisis de dibujos mediante Inteligencia Artificial y Computación Visual.";

pub const NO_FILE_SELECTED: &str = "Por favor selecciona una imagen primero.";
pub const REQUEST_FAILED: &str =
    "Error al analizar la imagen. El servidor puede estar iniciándose; espera unos segundos e inténtalo de nuevo.";
pub const ANALYSIS_IN_PROGRESS: &str = "Ya hay un análisis en curso.";

pub const UPLOAD_HEADING: &str = "1. Cargar Dibujo";
pub const RESULTS_HEADING: &str = "2. Resultados del Análisis";
pub const PREVIEW_LABEL: &str = "Vista previa:";
pub const ANALYZE_BUTTON: &str = "Analizar Emociones";
pub const LOADING_LABEL: &str = "Procesando con IA...";
pub const IDLE_PROMPT: &str = "Sube una imagen para ver el diagnóstico computacional.";

pub const HEADLINE_CAPTION: &str = "Emoción Predominante";
pub const CONFIDENCE_CAPTION: &str = "Certeza del modelo";
pub const CHART_TITLE: &str = "Distribución de Probabilidades Emocionales";
pub const DATASET_LABEL: &str = "Probabilidad (%)";
pub const DISCLAIMER: &str = "*Este análisis es una herramienta de apoyo basada en percepción computacional y no sustituye un diagnóstico psicológico profesional.";
