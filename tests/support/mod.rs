//! Stub-Kollaborateure und Fixture fuer die Controller-Flow-Tests.
//!
//! Alle Stubs schreiben ihre Aufrufe mit und teilen ihr Innenleben ueber
//! `Rc<RefCell<...>>` mit dem Test, damit Pruefungen auch nach dem Einbau
//! in den Controller moeglich bleiben.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use schaltplan_studio::{
    AudioSetup, DockHost, DocumentError, EditRecord, PropertyId, PropertyPanel, PropertyValue,
    SchematicEditor, SchematicLoader, SessionController, SessionHost, SessionIntent,
    SessionSettings, SessionState, SettingsStore, SimulationHost, ToolKind,
};

pub type EditorHandle = Rc<RefCell<EditorInner>>;

/// Drehbuch fuer einen einzelnen save()-Aufruf des Stub-Editors.
#[derive(Debug, Clone, Copy)]
pub enum SaveScript {
    /// Speichern gelingt.
    Ok,
    /// Nutzer bricht den Save-As-Dialog ab.
    Declined,
    /// IO-Fehler beim Schreiben.
    FailIo,
}

/// Innenleben eines Stub-Editors.
/// Der Test behaelt das `Rc` und praepariert bzw. prueft hierueber.
pub struct EditorInner {
    pub file_path: Option<PathBuf>,
    /// (Komponente, Eigenschaft) -> Wert.
    pub values: HashMap<(u64, String), PropertyValue>,
    /// Element -> inspizierbare Komponente; fehlende Elemente gelten als
    /// nicht inspizierbar (Leitungen).
    pub components: HashMap<u64, u64>,
    /// Drehbuch pro save()-Aufruf; leeres Drehbuch heisst: gelingt.
    pub save_script: VecDeque<SaveScript>,
    pub save_calls: usize,
    /// Pfad, den der naechste erfolgreiche save() setzt (Save-As).
    pub save_as_target: Option<PathBuf>,
    /// Antwort auf can_close(); Standard: Zustimmung.
    pub allow_close: bool,
    /// for_reopen-Flags aller can_close()-Aufrufe in Reihenfolge.
    pub close_prompts: Vec<bool>,
    pub installed_tools: Vec<ToolKind>,
}

impl EditorInner {
    fn new() -> Self {
        Self {
            file_path: None,
            values: HashMap::new(),
            components: HashMap::new(),
            save_script: VecDeque::new(),
            save_calls: 0,
            save_as_target: None,
            allow_close: true,
            close_prompts: Vec::new(),
            installed_tools: Vec::new(),
        }
    }

    /// Komponente samt Eigenschaftswert anlegen; das Element zeigt auf
    /// sich selbst.
    pub fn seed_component(&mut self, component_id: u64, property: &str, value: PropertyValue) {
        self.components.insert(component_id, component_id);
        self.values
            .insert((component_id, property.to_string()), value);
    }

    pub fn number_value(&self, component_id: u64, property: &str) -> f64 {
        match self.values.get(&(component_id, property.to_string())) {
            Some(PropertyValue::Number(n)) => *n,
            other => panic!("Erwartete Zahl fuer Komponente {component_id}, war {other:?}"),
        }
    }
}

pub fn new_editor() -> EditorHandle {
    Rc::new(RefCell::new(EditorInner::new()))
}

/// Box-barer Editor ueber geteiltem Innenleben.
pub struct StubEditor(pub EditorHandle);

impl SchematicEditor for StubEditor {
    fn file_path(&self) -> Option<PathBuf> {
        self.0.borrow().file_path.clone()
    }

    fn has_pending_edits(&self) -> bool {
        false
    }

    fn save(&mut self) -> Result<bool, DocumentError> {
        let mut inner = self.0.borrow_mut();
        inner.save_calls += 1;
        match inner.save_script.pop_front().unwrap_or(SaveScript::Ok) {
            SaveScript::Ok => {
                if let Some(target) = inner.save_as_target.take() {
                    inner.file_path = Some(target);
                }
                Ok(true)
            }
            SaveScript::Declined => Ok(false),
            SaveScript::FailIo => Err(DocumentError::Io {
                path: inner
                    .file_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("unbenannt.sch")),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "Schreibfehler (Stub)",
                ),
            }),
        }
    }

    fn can_close(&mut self, for_reopen: bool) -> bool {
        let mut inner = self.0.borrow_mut();
        inner.close_prompts.push(for_reopen);
        inner.allow_close
    }

    fn component_of(&self, element_id: u64) -> Option<u64> {
        self.0.borrow().components.get(&element_id).copied()
    }

    fn property_value(&self, component_id: u64, property: &PropertyId) -> Option<PropertyValue> {
        self.0
            .borrow()
            .values
            .get(&(component_id, property.as_str().to_string()))
            .cloned()
    }

    fn set_property(
        &mut self,
        component_id: u64,
        property: &PropertyId,
        value: &PropertyValue,
    ) -> bool {
        self.0
            .borrow_mut()
            .values
            .insert((component_id, property.as_str().to_string()), value.clone());
        true
    }

    fn install_tool(&mut self, tool: ToolKind) {
        self.0.borrow_mut().installed_tools.push(tool);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PlannedError {
    Io,
    Format,
}

/// Loader-Stub: gibt geplante Editoren der Reihe nach aus und merkt sich
/// jede ausgegebene Instanz.
pub struct LoaderInner {
    /// Ergebnisse der naechsten load()-Aufrufe; leer heisst frischer Editor.
    planned: RefCell<VecDeque<Result<EditorHandle, PlannedError>>>,
    /// Alle ausgegebenen Editoren (load und create) in Reihenfolge.
    issued: RefCell<Vec<EditorHandle>>,
}

impl LoaderInner {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            planned: RefCell::new(VecDeque::new()),
            issued: RefCell::new(Vec::new()),
        })
    }

    /// Der naechste load() liefert diesen vorbereiteten Editor.
    pub fn plan_editor(&self, editor: EditorHandle) {
        self.planned.borrow_mut().push_back(Ok(editor));
    }

    /// Der naechste load() schlaegt fehl.
    pub fn plan_error(&self, error: PlannedError) {
        self.planned.borrow_mut().push_back(Err(error));
    }

    pub fn issued_count(&self) -> usize {
        self.issued.borrow().len()
    }

    /// Zuletzt ausgegebener Editor.
    pub fn last_issued(&self) -> EditorHandle {
        self.issued
            .borrow()
            .last()
            .cloned()
            .expect("Loader hat noch keinen Editor ausgegeben")
    }
}

pub struct StubLoader(pub Rc<LoaderInner>);

impl StubLoader {
    fn issue(&self, editor: EditorHandle) -> Box<dyn SchematicEditor> {
        self.0.issued.borrow_mut().push(editor.clone());
        Box::new(StubEditor(editor))
    }
}

impl SchematicLoader for StubLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn SchematicEditor>, DocumentError> {
        match self.0.planned.borrow_mut().pop_front() {
            Some(Ok(editor)) => {
                if editor.borrow().file_path.is_none() {
                    editor.borrow_mut().file_path = Some(path.to_path_buf());
                }
                Ok(self.issue(editor))
            }
            Some(Err(PlannedError::Io)) => Err(DocumentError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "Lesefehler (Stub)"),
            }),
            Some(Err(PlannedError::Format)) => Err(DocumentError::FileFormat {
                path: path.to_path_buf(),
                reason: "Kein Schaltplan (Stub)".to_string(),
            }),
            None => {
                let editor = new_editor();
                editor.borrow_mut().file_path = Some(path.to_path_buf());
                Ok(self.issue(editor))
            }
        }
    }

    fn create(&self) -> Box<dyn SchematicEditor> {
        self.issue(new_editor())
    }
}

/// Mitschrift der Dock-Aufrufe.
#[derive(Debug, Clone, PartialEq)]
pub enum DockEvent {
    AddDocument { document_id: u64, title: String },
    SetTitle { document_id: u64, title: String },
    Focus(u64),
    CloseView(u64),
    SaveLayout,
    LoadLayout(String),
}

pub struct DockInner {
    pub events: Vec<DockEvent>,
    /// Blob, das save_layout() liefert.
    pub layout_blob: String,
    /// Simuliert ein korruptes Blob beim Restore.
    pub fail_restore: bool,
}

impl DockInner {
    fn new() -> Self {
        Self {
            events: Vec::new(),
            layout_blob: "dock-v1:standard".to_string(),
            fail_restore: false,
        }
    }

    pub fn has_event(&self, event: &DockEvent) -> bool {
        self.events.contains(event)
    }

    pub fn count_adds(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, DockEvent::AddDocument { .. }))
            .count()
    }
}

pub struct RecordingDock(pub Rc<RefCell<DockInner>>);

impl DockHost for RecordingDock {
    fn add_document(&mut self, document_id: u64, title: &str, _path: Option<&Path>) {
        self.0.borrow_mut().events.push(DockEvent::AddDocument {
            document_id,
            title: title.to_string(),
        });
    }

    fn set_title(&mut self, document_id: u64, title: &str, _path: Option<&Path>) {
        self.0.borrow_mut().events.push(DockEvent::SetTitle {
            document_id,
            title: title.to_string(),
        });
    }

    fn focus_view(&mut self, document_id: u64) {
        self.0.borrow_mut().events.push(DockEvent::Focus(document_id));
    }

    fn close_view(&mut self, document_id: u64) {
        self.0
            .borrow_mut()
            .events
            .push(DockEvent::CloseView(document_id));
    }

    fn save_layout(&self) -> String {
        let mut inner = self.0.borrow_mut();
        inner.events.push(DockEvent::SaveLayout);
        inner.layout_blob.clone()
    }

    fn load_layout(&mut self, blob: &str) -> anyhow::Result<()> {
        let mut inner = self.0.borrow_mut();
        inner.events.push(DockEvent::LoadLayout(blob.to_string()));
        if inner.fail_restore {
            anyhow::bail!("Layout-Blob nicht lesbar (Stub)");
        }
        Ok(())
    }
}

/// Mitschrift der Panel-Bindungen: `Some` fuer bind, `None` fuer clear.
pub struct PanelInner {
    pub bindings: Vec<Option<(u64, Vec<u64>)>>,
    pub focus_calls: usize,
}

impl PanelInner {
    /// Zuletzt gebundener Kontext; `None` heisst geleert oder nie gebunden.
    pub fn current(&self) -> Option<(u64, Vec<u64>)> {
        self.bindings.last().cloned().flatten()
    }
}

pub struct RecordingPanel(pub Rc<RefCell<PanelInner>>);

impl PropertyPanel for RecordingPanel {
    fn bind(&mut self, document_id: u64, components: &[u64]) {
        self.0
            .borrow_mut()
            .bindings
            .push(Some((document_id, components.to_vec())));
    }

    fn clear(&mut self) {
        self.0.borrow_mut().bindings.push(None);
    }

    fn focus(&mut self) {
        self.0.borrow_mut().focus_calls += 1;
    }
}

pub struct SimulationInner {
    pub launches: Vec<(u64, AudioSetup)>,
    pub fail_next: bool,
}

pub struct RecordingSimulation(pub Rc<RefCell<SimulationInner>>);

impl SimulationHost for RecordingSimulation {
    fn launch(&mut self, document_id: u64, audio: &AudioSetup) -> anyhow::Result<()> {
        let mut inner = self.0.borrow_mut();
        if inner.fail_next {
            inner.fail_next = false;
            anyhow::bail!("Audio-Geraet nicht verfuegbar (Stub)");
        }
        inner.launches.push((document_id, audio.clone()));
        Ok(())
    }
}

/// In-Memory-Einstellungen statt TOML-Datei.
pub struct SettingsInner {
    pub stored: SessionSettings,
    pub save_calls: usize,
}

pub struct MemorySettings(pub Rc<RefCell<SettingsInner>>);

impl SettingsStore for MemorySettings {
    fn load(&self) -> SessionSettings {
        self.0.borrow().stored.clone()
    }

    fn save(&self, settings: &SessionSettings) -> anyhow::Result<()> {
        let mut inner = self.0.borrow_mut();
        inner.stored = settings.clone();
        inner.save_calls += 1;
        Ok(())
    }
}

/// Controller, Zustand und Stub-Handles fuer einen Testablauf.
pub struct SessionFixture {
    pub controller: SessionController,
    pub state: SessionState,
    pub loader: Rc<LoaderInner>,
    pub dock: Rc<RefCell<DockInner>>,
    pub panel: Rc<RefCell<PanelInner>>,
    pub simulation: Rc<RefCell<SimulationInner>>,
    pub settings: Rc<RefCell<SettingsInner>>,
    /// Haelt die Schaltplan-Dateien der Tests am Leben.
    pub dir: tempfile::TempDir,
}

impl SessionFixture {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let loader = LoaderInner::new();
        let dock = Rc::new(RefCell::new(DockInner::new()));
        let panel = Rc::new(RefCell::new(PanelInner {
            bindings: Vec::new(),
            focus_calls: 0,
        }));
        let simulation = Rc::new(RefCell::new(SimulationInner {
            launches: Vec::new(),
            fail_next: false,
        }));
        let settings = Rc::new(RefCell::new(SettingsInner {
            stored: SessionSettings::default(),
            save_calls: 0,
        }));

        let controller = SessionController::new(SessionHost {
            loader: Box::new(StubLoader(loader.clone())),
            dock: Box::new(RecordingDock(dock.clone())),
            properties: Box::new(RecordingPanel(panel.clone())),
            simulation: Box::new(RecordingSimulation(simulation.clone())),
            settings: Box::new(MemorySettings(settings.clone())),
        });

        Self {
            controller,
            state: SessionState::new(),
            loader,
            dock,
            panel,
            simulation,
            settings,
            dir: tempfile::TempDir::new().expect("Tempdir sollte anlegbar sein"),
        }
    }

    /// Schickt einen Intent durch den Controller.
    pub fn intent(&mut self, intent: SessionIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte verarbeitet werden");
    }

    /// Legt eine leere Schaltplan-Datei im Testverzeichnis an.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, "").expect("Testdatei sollte anlegbar sein");
        path
    }

    /// Legt eine Datei an, oeffnet sie und liefert kanonischen Pfad samt
    /// Dokument-ID.
    pub fn open_file(&mut self, name: &str) -> (PathBuf, u64) {
        let path = self.create_file(name);
        self.intent(SessionIntent::FileSelected { path: path.clone() });
        let canonical =
            std::fs::canonicalize(&path).expect("Testpfad sollte kanonisierbar sein");
        let id = self
            .state
            .documents
            .find_by_canonical(&canonical)
            .expect("Dokument sollte registriert sein");
        (canonical, id)
    }

    /// Verpasst einem Dokument einen offenen Edit, wie ihn das Panel nach
    /// einer Wertaenderung verbuchen wuerde.
    pub fn make_dirty(&mut self, document_id: u64) {
        let edit = EditRecord::Property {
            entity_id: 1,
            property: PropertyId::new("resistance"),
            old_value: PropertyValue::Number(100.0),
            new_value: PropertyValue::Number(220.0),
        };
        self.state
            .documents
            .get_mut(document_id)
            .expect("Dokument sollte registriert sein")
            .record(edit);
    }
}
