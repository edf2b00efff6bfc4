pub mod blackboard_prompt;
