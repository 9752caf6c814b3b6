use crate::model::record::StudentRecord;

pub fn demo_roster() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new("Alice Johnson", 45.0, 50.0)
            .with_questions(&[("Q1", 4.5), ("Q2", 5.0), ("Q3", 4.0)])
            .with_concepts(&["Thermodynamics", "Kinematics"]),
        StudentRecord::new("Bob Smith", 38.0, 50.0)
            .with_questions(&[("Q1", 3.0), ("Q2", 4.0), ("Q3", 4.0)])
            .with_concepts(&["Thermodynamics"]),
        StudentRecord::new("Charlie Brown", 48.0, 50.0)
            .with_questions(&[("Q1", 5.0), ("Q2", 5.0), ("Q3", 5.0)])
            .with_concepts(&["Thermodynamics", "Kinematics", "Entanglement"]),
        StudentRecord::new("Diana Prince", 25.0, 50.0)
            .with_questions(&[("Q1", 2.0), ("Q2", 1.0), ("Q3", 3.0)])
            .with_concepts(&["Kinematics"]),
    ]
}
