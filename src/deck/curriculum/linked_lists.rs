use crate::deck::{Slide, Topic};

pub(super) const TOPIC: Topic = Topic {
    id: 1,
    name: "Linked Lists",
    duration: "1 hour",
    slides: SLIDES,
};

const SLIDES: &[Slide] = &[
    Slide::Title {
        title: "Linked Lists",
        subtitle: "Dynamic Data Structure in JavaScript",
        description: "Understanding linear data structures with dynamic memory allocation",
    },
    Slide::Content {
        title: "What is a Linked List?",
        points: &[
            "A linear data structure where elements are stored in nodes",
            "Each node contains data and a reference (pointer) to the next node",
            "Dynamic size - can grow or shrink during execution",
            "Non-contiguous memory allocation",
            "Types: Singly, Doubly, Circular",
        ],
        diagram: true,
    },
    Slide::Content {
        title: "Advantages vs Arrays",
        points: &[
            "✅ Dynamic size (no fixed length)",
            "✅ Efficient insertion/deletion at beginning (O(1))",
            "✅ No memory waste from pre-allocation",
            "❌ No random access (must traverse)",
            "❌ Extra memory for pointers",
            "❌ Not cache friendly",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Node Class Implementation",
        description: Some("Building block of a Linked List"),
        code: r#"// Node class represents each element in the linked list
class Node {
  constructor(data) {
    this.data = data;      // Store the value
    this.next = null;      // Reference to next node
  }
}

// Example: Creating nodes
const node1 = new Node(10);
const node2 = new Node(20);
const node3 = new Node(30);

// Linking nodes
node1.next = node2;
node2.next = node3;

console.log(node1.data);        // 10
console.log(node1.next.data);   // 20"#,
    },
    Slide::Code {
        title: "Singly Linked List - Class Structure",
        description: Some("Complete implementation with basic operations"),
        code: r#"class LinkedList {
  constructor() {
    this.head = null;    // First node
    this.size = 0;       // Track length
  }

  // Check if list is empty
  isEmpty() {
    return this.head === null;
  }

  // Get the size
  getSize() {
    return this.size;
  }

  // Display all elements
  print() {
    if (this.isEmpty()) {
      console.log("List is empty");
      return;
    }

    let current = this.head;
    let listValues = '';

    while (current) {
      listValues += current.data + ' -> ';
      current = current.next;
    }

    console.log(listValues + 'null');
  }
}"#,
    },
    Slide::Code {
        title: "Insert at Beginning - prepend()",
        description: Some("Adding element at the start - O(1) time complexity"),
        code: r#"// Insert at the beginning (Head)
prepend(data) {
  const newNode = new Node(data);

  if (this.isEmpty()) {
    // If list is empty, new node becomes head
    this.head = newNode;
  } else {
    // Point new node to current head
    newNode.next = this.head;
    // Update head to new node
    this.head = newNode;
  }

  this.size++;
}

// Usage Example:
const list = new LinkedList();
list.prepend(30);  // List: 30 -> null
list.prepend(20);  // List: 20 -> 30 -> null
list.prepend(10);  // List: 10 -> 20 -> 30 -> null
list.print();      // Output: 10 -> 20 -> 30 -> null"#,
    },
    Slide::Code {
        title: "Insert at End - append()",
        description: Some("Adding element at the end - O(n) time complexity"),
        code: r#"// Insert at the end (Tail)
append(data) {
  const newNode = new Node(data);

  if (this.isEmpty()) {
    // If empty, new node becomes head
    this.head = newNode;
  } else {
    // Traverse to the last node
    let current = this.head;
    while (current.next !== null) {
      current = current.next;
    }
    // Link last node to new node
    current.next = newNode;
  }

  this.size++;
}

// Usage Example:
const list = new LinkedList();
list.append(10);   // List: 10 -> null
list.append(20);   // List: 10 -> 20 -> null
list.append(30);   // List: 10 -> 20 -> 30 -> null
list.print();"#,
    },
    Slide::Code {
        title: "Insert at Position - insert()",
        description: Some("Insert at specific index - O(n) time complexity"),
        code: r#"// Insert at specific position
insert(data, position) {
  // Validate position
  if (position < 0 || position > this.size) {
    console.log("Invalid position");
    return;
  }

  // If inserting at beginning
  if (position === 0) {
    this.prepend(data);
    return;
  }

  const newNode = new Node(data);
  let current = this.head;

  // Traverse to position - 1
  for (let i = 0; i < position - 1; i++) {
    current = current.next;
  }

  // Insert new node
  newNode.next = current.next;
  current.next = newNode;
  this.size++;
}

// Example:
list.insert(15, 1);  // Insert 15 at index 1"#,
    },
    Slide::Code {
        title: "Delete from Beginning - removeFirst()",
        description: Some("Remove first element - O(1) time complexity"),
        code: r#"// Remove first node
removeFirst() {
  if (this.isEmpty()) {
    console.log("List is empty");
    return null;
  }

  const removedNode = this.head;
  this.head = this.head.next;
  this.size--;

  return removedNode.data;
}

// Usage Example:
const list = new LinkedList();
list.append(10);
list.append(20);
list.append(30);
// List: 10 -> 20 -> 30 -> null

const removed = list.removeFirst();
console.log(removed);  // 10
list.print();          // 20 -> 30 -> null"#,
    },
    Slide::Code {
        title: "Delete from End - removeLast()",
        description: Some("Remove last element - O(n) time complexity"),
        code: r#"// Remove last node
removeLast() {
  if (this.isEmpty()) {
    console.log("List is empty");
    return null;
  }

  // If only one node
  if (this.size === 1) {
    const removedNode = this.head;
    this.head = null;
    this.size--;
    return removedNode.data;
  }

  // Traverse to second last node
  let current = this.head;
  while (current.next.next !== null) {
    current = current.next;
  }

  const removedNode = current.next;
  current.next = null;
  this.size--;

  return removedNode.data;
}

// Example:
const removed = list.removeLast();
console.log(removed);  // Last element"#,
    },
    Slide::Code {
        title: "Delete by Value - removeValue()",
        description: Some("Remove node with specific value - O(n)"),
        code: r#"// Remove node by value
removeValue(value) {
  if (this.isEmpty()) {
    console.log("List is empty");
    return null;
  }

  // If head needs to be removed
  if (this.head.data === value) {
    this.head = this.head.next;
    this.size--;
    return value;
  }

  // Search for the node
  let current = this.head;
  while (current.next && current.next.data !== value) {
    current = current.next;
  }

  // If value found
  if (current.next) {
    current.next = current.next.next;
    this.size--;
    return value;
  }

  console.log("Value not found");
  return null;
}

// Example:
list.removeValue(20);  // Remove node with value 20"#,
    },
    Slide::Code {
        title: "Search & Reverse Operations",
        description: Some("Additional useful operations"),
        code: r#"// Search for a value
search(value) {
  if (this.isEmpty()) return false;

  let current = this.head;
  let index = 0;

  while (current) {
    if (current.data === value) {
      return index;  // Return position
    }
    current = current.next;
    index++;
  }

  return -1;  // Not found
}

// Reverse the linked list
reverse() {
  let prev = null;
  let current = this.head;
  let next = null;

  while (current) {
    next = current.next;    // Store next
    current.next = prev;    // Reverse link
    prev = current;         // Move prev forward
    current = next;         // Move current forward
  }

  this.head = prev;  // Update head
}

// Example:
console.log(list.search(20));  // Returns index
list.reverse();                 // Reverses list"#,
    },
    Slide::Content {
        title: "Time & Space Complexity",
        points: &[
            "**Access**: O(n) - Must traverse from head",
            "**Search**: O(n) - Linear search required",
            "**Insert at beginning**: O(1) - Direct head update",
            "**Insert at end**: O(n) - Must traverse to end",
            "**Insert at position**: O(n) - Traverse to position",
            "**Delete**: O(n) - Need to find the node",
            "**Space Complexity**: O(n) - n nodes",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Complete Linked List Implementation",
        description: Some("Full working code with all operations"),
        code: r#"class Node {
  constructor(data) {
    this.data = data;
    this.next = null;
  }
}

class LinkedList {
  constructor() {
    this.head = null;
    this.size = 0;
  }

  isEmpty() { return this.head === null; }
  getSize() { return this.size; }

  prepend(data) {
    const node = new Node(data);
    node.next = this.head;
    this.head = node;
    this.size++;
  }

  append(data) {
    const node = new Node(data);
    if (this.isEmpty()) {
      this.head = node;
    } else {
      let curr = this.head;
      while (curr.next) curr = curr.next;
      curr.next = node;
    }
    this.size++;
  }

  print() {
    let curr = this.head, str = '';
    while (curr) {
      str += curr.data + ' -> ';
      curr = curr.next;
    }
    console.log(str + 'null');
  }
}

// Usage
const list = new LinkedList();
list.append(1);
list.append(2);
list.prepend(0);
list.print();  // 0 -> 1 -> 2 -> null"#,
    },
    Slide::Content {
        title: "Practice Problems",
        points: &[
            "1. Detect cycle in linked list (Floyd's algorithm)",
            "2. Find middle element in one pass",
            "3. Merge two sorted linked lists",
            "4. Remove duplicates from sorted list",
            "5. Check if linked list is palindrome",
            "6. Find nth node from end",
            "7. Intersection point of two lists",
        ],
        diagram: false,
    },
];
